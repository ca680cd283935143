//! One search interaction: query (and optional disambiguation pick) in,
//! displayable outcome out. Shared by the HTML page and the JSON API.

use serde::Serialize;
use tracing::info;

use seatfinder_shared::Resolution;

use crate::venue::Venue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MapStatus {
    /// `/map.png?table=…` will carry a marker.
    Marked,
    /// The table has no configured position; the plan is shown unmarked.
    CoordinatesMissing,
    /// No floor plan loaded.
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LookupOutcome {
    /// Nothing selected yet.
    Idle,
    NotFound {
        query: String,
    },
    Ambiguous {
        query: String,
        /// Disambiguation labels, in sheet order.
        options: Vec<String>,
    },
    Found {
        placard_name: String,
        table: String,
        group: String,
        map: MapStatus,
    },
}

pub fn lookup(venue: &Venue, query: Option<&str>, pick: Option<&str>) -> LookupOutcome {
    let Some(query) = query.map(str::trim).filter(|q| !q.is_empty()) else {
        return LookupOutcome::Idle;
    };

    match venue.resolver().lookup(query, pick) {
        Resolution::NotFound => {
            info!(query, "Guest not found");
            LookupOutcome::NotFound {
                query: query.to_string(),
            }
        }
        Resolution::Ambiguous { candidates } => LookupOutcome::Ambiguous {
            query: query.to_string(),
            options: candidates.into_iter().map(|c| c.label).collect(),
        },
        Resolution::Resolved(guest) => {
            let table = guest.table_label();
            let map = match &venue.floor_plan {
                None => MapStatus::Unavailable,
                Some(_) if venue.coords.contains(&table) => MapStatus::Marked,
                Some(_) => MapStatus::CoordinatesMissing,
            };

            info!(guest = %guest, ?map, "Guest resolved");
            LookupOutcome::Found {
                placard_name: guest.placard_name.clone(),
                table,
                group: guest.group_label().to_string(),
                map,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::venue::tests::write_fixtures;

    fn venue() -> (Venue, tempfile::TempDir) {
        let tmp = tempfile::tempdir().unwrap();
        let venue = Venue::load(&write_fixtures(tmp.path()));
        (venue, tmp)
    }

    #[test]
    fn test_idle_without_query() {
        let (venue, _tmp) = venue();
        assert_eq!(lookup(&venue, None, None), LookupOutcome::Idle);
        assert_eq!(lookup(&venue, Some("  "), None), LookupOutcome::Idle);
    }

    #[test]
    fn test_found_marked() {
        let (venue, _tmp) = venue();
        assert_eq!(
            lookup(&venue, Some("JANE DOE"), None),
            LookupOutcome::Found {
                placard_name: "Jane Doe".into(),
                table: "3".into(),
                group: "Bride's Aunt".into(),
                map: MapStatus::Marked,
            }
        );
    }

    #[test]
    fn test_not_found() {
        let (venue, _tmp) = venue();
        assert_eq!(
            lookup(&venue, Some("nonexistent person"), None),
            LookupOutcome::NotFound {
                query: "nonexistent person".into()
            }
        );
    }

    #[test]
    fn test_ambiguous_then_picked() {
        let (venue, _tmp) = venue();
        assert_eq!(
            lookup(&venue, Some("john smith"), None),
            LookupOutcome::Ambiguous {
                query: "john smith".into(),
                options: vec![
                    "John Smith (Groom's Uncle)".into(),
                    "John Smith (Best Man)".into()
                ],
            }
        );

        match lookup(&venue, Some("john smith"), Some("John Smith (Best Man)")) {
            LookupOutcome::Found { table, .. } => assert_eq!(table, "VIP"),
            other => panic!("expected Found, got {other:?}"),
        }
    }

    #[test]
    fn test_coordinates_missing() {
        let (venue, _tmp) = venue();
        match lookup(&venue, Some("cousin"), None) {
            LookupOutcome::Found { table, map, .. } => {
                assert_eq!(table, "99");
                assert_eq!(map, MapStatus::CoordinatesMissing);
            }
            other => panic!("expected Found, got {other:?}"),
        }
    }

    #[test]
    fn test_map_unavailable() {
        let (mut venue, _tmp) = venue();
        venue.floor_plan = None;
        match lookup(&venue, Some("jane doe"), None) {
            LookupOutcome::Found { map, .. } => assert_eq!(map, MapStatus::Unavailable),
            other => panic!("expected Found, got {other:?}"),
        }
    }

    #[test]
    fn test_serializes_with_status_tag() {
        let json = serde_json::to_value(LookupOutcome::Idle).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "idle" }));
    }
}
