//! Read-only session context.
//!
//! Everything expensive (guest sheet, floor plan, table coordinates) is
//! loaded once here. Load failures are logged and kept as user-facing
//! messages; they never abort startup.

use seatfinder_shared::{FloorPlan, Resolver, TableCoordinates};
use seatfinder_store::GuestDirectory;
use tracing::{info, warn};

use crate::config::ServerConfig;

#[derive(Debug)]
pub struct Venue {
    pub directory: GuestDirectory,
    pub floor_plan: Option<FloorPlan>,
    pub coords: TableCoordinates,
    /// Why the guest list is unavailable, if it is.
    pub data_error: Option<String>,
    /// Why the floor plan is unavailable, if it is.
    pub map_error: Option<String>,
}

impl Venue {
    pub fn load(config: &ServerConfig) -> Self {
        let (directory, data_error) = match GuestDirectory::load(&config.guest_data_path) {
            Ok(dir) if dir.is_empty() => {
                warn!(path = %config.guest_data_path.display(), "Guest data file has no guests");
                (dir, Some("The guest list is empty.".to_string()))
            }
            Ok(dir) => (dir, None),
            Err(e) => {
                warn!(error = %e, "Guest data unavailable");
                (GuestDirectory::empty(), Some(e.to_string()))
            }
        };

        let (floor_plan, map_error) =
            match FloorPlan::load(&config.floor_plan_path, config.max_map_width) {
                Ok(plan) => (Some(plan), None),
                Err(e) => {
                    warn!(error = %e, "Floor plan unavailable, map display disabled");
                    (None, Some(e.to_string()))
                }
            };

        let coords = match &config.table_coords_path {
            Some(path) => TableCoordinates::from_file(path).unwrap_or_else(|e| {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to load table coordinates, using built-in layout"
                );
                TableCoordinates::builtin()
            }),
            None => TableCoordinates::builtin(),
        };

        info!(
            guests = directory.len(),
            search_terms = directory.search_terms().len(),
            map = floor_plan.is_some(),
            tables = coords.len(),
            "Venue loaded"
        );

        Self {
            directory,
            floor_plan,
            coords,
            data_error,
            map_error,
        }
    }

    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(self.directory.guests())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use std::path::Path;

    pub(crate) const SHEET: &str = "\
Placard Name,Table,Relationship to Couple
Jane Doe,3,Bride's Aunt
John Smith,5,Groom's Uncle
John Smith,VIP,Best Man
Bob Lee,99,Cousin
";

    /// Writes a guest sheet and a 200x200 white floor plan into `dir`.
    pub(crate) fn write_fixtures(dir: &Path) -> ServerConfig {
        let guest_data_path = dir.join("guests.csv");
        std::fs::write(&guest_data_path, SHEET).unwrap();

        let floor_plan_path = dir.join("plan.png");
        RgbImage::from_pixel(200, 200, Rgb([255, 255, 255]))
            .save(&floor_plan_path)
            .unwrap();

        ServerConfig {
            guest_data_path,
            floor_plan_path,
            ..ServerConfig::default()
        }
    }

    #[test]
    fn test_load_fixtures() {
        let tmp = tempfile::tempdir().unwrap();
        let venue = Venue::load(&write_fixtures(tmp.path()));

        assert_eq!(venue.directory.len(), 4);
        assert!(venue.floor_plan.is_some());
        assert!(venue.data_error.is_none());
        assert!(venue.map_error.is_none());
        assert!(venue.coords.contains("VIP"));
    }

    #[test]
    fn test_missing_files_degrade() {
        let tmp = tempfile::tempdir().unwrap();
        let config = ServerConfig {
            guest_data_path: tmp.path().join("missing.csv"),
            floor_plan_path: tmp.path().join("missing.png"),
            table_coords_path: Some(tmp.path().join("missing.json")),
            ..ServerConfig::default()
        };

        let venue = Venue::load(&config);
        assert!(venue.directory.is_empty());
        assert!(venue.floor_plan.is_none());
        assert!(venue.data_error.unwrap().contains("not found"));
        assert!(venue.map_error.unwrap().contains("not found"));
        assert_eq!(venue.coords, TableCoordinates::builtin());
    }

    #[test]
    fn test_empty_sheet_is_unavailable() {
        let tmp = tempfile::tempdir().unwrap();
        let config = write_fixtures(tmp.path());
        std::fs::write(&config.guest_data_path, "Placard Name,Table\n").unwrap();

        let venue = Venue::load(&config);
        assert!(venue.data_error.is_some());
    }
}
