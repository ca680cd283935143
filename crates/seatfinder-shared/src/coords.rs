//! Table → pixel position configuration.
//!
//! Positions are hand-measured against the floor plan at its original
//! resolution. Deployments override the built-in layout with a JSON file:
//!
//! ```json
//! { "radius": 35, "tables": { "VIP": [150, 250], "1": [800, 200] } }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::constants::{DEFAULT_MARKER_RADIUS, MAX_MARKER_RADIUS};
use crate::error::CoordinatesError;
use crate::types::Point;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCoordinates {
    radius: u32,
    /// Keyed by upper-cased table identifier.
    tables: BTreeMap<String, Point>,
}

#[derive(Deserialize)]
struct CoordinatesFile {
    #[serde(default = "default_radius")]
    radius: u32,
    tables: BTreeMap<String, [u32; 2]>,
}

fn default_radius() -> u32 {
    DEFAULT_MARKER_RADIUS
}

impl TableCoordinates {
    pub fn new(radius: u32, tables: impl IntoIterator<Item = (String, Point)>) -> Self {
        Self {
            radius,
            tables: tables
                .into_iter()
                .map(|(id, point)| (id.trim().to_uppercase(), point))
                .collect(),
        }
    }

    /// Sample layout for the bundled floor plan. Replace per venue.
    pub fn builtin() -> Self {
        const LAYOUT: [(&str, (u32, u32)); 16] = [
            ("VIP", (150, 250)),
            ("1", (800, 200)),
            ("2", (800, 500)),
            ("3", (500, 800)),
            ("4", (200, 750)),
            ("5", (300, 500)),
            ("6", (500, 250)),
            ("7", (650, 700)),
            ("8", (100, 500)),
            ("9", (150, 600)),
            ("10", (250, 350)),
            ("11", (400, 150)),
            ("12", (700, 300)),
            ("13", (750, 650)),
            ("14", (450, 500)),
            ("15", (350, 650)),
        ];

        Self::new(
            DEFAULT_MARKER_RADIUS,
            LAYOUT
                .iter()
                .map(|(id, xy)| (id.to_string(), Point::from(*xy))),
        )
    }

    pub fn from_json(json: &str) -> Result<Self, CoordinatesError> {
        let file: CoordinatesFile = serde_json::from_str(json)?;
        if file.radius == 0 {
            return Err(CoordinatesError::ZeroRadius);
        }
        if file.radius > MAX_MARKER_RADIUS {
            return Err(CoordinatesError::RadiusTooLarge {
                radius: file.radius,
                max: MAX_MARKER_RADIUS,
            });
        }
        Ok(Self::new(
            file.radius,
            file.tables
                .into_iter()
                .map(|(id, [x, y])| (id, Point { x, y })),
        ))
    }

    pub fn from_file(path: &Path) -> Result<Self, CoordinatesError> {
        let json = std::fs::read_to_string(path)?;
        let coords = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            tables = coords.len(),
            radius = coords.radius,
            "Loaded table coordinates"
        );
        Ok(coords)
    }

    /// Marker radius in original-resolution pixels.
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Position of `table_id`, matched case-insensitively.
    pub fn get(&self, table_id: &str) -> Option<Point> {
        self.tables.get(&table_id.trim().to_uppercase()).copied()
    }

    /// Whether `table_id` has a configured position.
    pub fn contains(&self, table_id: &str) -> bool {
        self.get(table_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl Default for TableCoordinates {
    fn default() -> Self {
        Self::builtin()
    }
}
