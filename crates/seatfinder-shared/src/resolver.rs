//! Guest resolution: exact, case-insensitive matching of a query against
//! placard names and relationships, plus disambiguation when several guests
//! match.
//!
//! A lookup moves through these states:
//!
//! ```text
//! query ──► 0 matches ──► NotFound
//!       ├─► 1 match   ──► Resolved
//!       └─► n matches ──► Ambiguous ──(label picked)──► Resolved
//! ```
//!
//! `Ambiguous` with no (or an unknown) label selected is simply incomplete,
//! not an error.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::types::GuestRecord;

/// Trim and lower-case a string for comparison.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// One entry of the disambiguation dropdown.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Candidate<'a> {
    /// Unique within the candidate set.
    pub label: String,
    pub guest: &'a GuestRecord,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    NotFound,
    Resolved(&'a GuestRecord),
    Ambiguous { candidates: Vec<Candidate<'a>> },
}

/// Read-only view over the guest list.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    guests: &'a [GuestRecord],
}

impl<'a> Resolver<'a> {
    pub fn new(guests: &'a [GuestRecord]) -> Self {
        Self { guests }
    }

    /// All guests whose placard name or relationship equals `query`
    /// (trimmed, case-insensitive). A blank query matches nothing.
    pub fn matches(&self, query: &str) -> Vec<&'a GuestRecord> {
        let needle = normalize(query);
        if needle.is_empty() {
            return Vec::new();
        }

        self.guests
            .iter()
            .filter(|guest| {
                normalize(&guest.placard_name) == needle
                    || guest
                        .relationship
                        .as_deref()
                        .is_some_and(|rel| normalize(rel) == needle)
            })
            .collect()
    }

    /// Matches for `query` paired with their disambiguation labels.
    ///
    /// Guests sharing both placard name and relationship would produce the
    /// same label; the second and later ones get a ` #n` suffix so every
    /// label selects exactly one guest.
    pub fn candidates(&self, query: &str) -> Vec<Candidate<'a>> {
        let mut seen: HashMap<String, usize> = HashMap::new();

        self.matches(query)
            .into_iter()
            .map(|guest| {
                let base = guest.disambiguation_label();
                let count = seen.entry(base.clone()).or_insert(0);
                *count += 1;
                let label = if *count == 1 {
                    base
                } else {
                    format!("{base} #{count}")
                };
                Candidate { label, guest }
            })
            .collect()
    }

    /// Run one lookup. `selection` is the disambiguation label picked by the
    /// user, if any; it is ignored unless the query is ambiguous.
    pub fn lookup(&self, query: &str, selection: Option<&str>) -> Resolution<'a> {
        let mut candidates = self.candidates(query);

        match candidates.len() {
            0 => Resolution::NotFound,
            1 => Resolution::Resolved(candidates.remove(0).guest),
            n => {
                let picked = selection
                    .filter(|label| !label.is_empty())
                    .and_then(|label| resolve(&candidates, label));

                match picked {
                    Some(guest) => Resolution::Resolved(guest),
                    None => {
                        debug!(query, matches = n, "Lookup awaiting disambiguation");
                        Resolution::Ambiguous { candidates }
                    }
                }
            }
        }
    }
}

/// Select the candidate whose label equals `label` exactly.
pub fn resolve<'a>(candidates: &[Candidate<'a>], label: &str) -> Option<&'a GuestRecord> {
    candidates
        .iter()
        .find(|c| c.label == label)
        .map(|c| c.guest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guests() -> Vec<GuestRecord> {
        vec![
            GuestRecord::new("Jane Doe", Some("Bride's Aunt"), "3"),
            GuestRecord::new("John Smith", Some("Groom's Uncle"), "5"),
            GuestRecord::new("John Smith", Some("Best Man"), "VIP"),
            GuestRecord::new("Alice Wong", Some("Best Man"), "vip"),
            GuestRecord::new("Bob Lee", None, "12"),
        ]
    }

    #[test]
    fn test_single_match_resolves() {
        let guests = guests();
        let resolver = Resolver::new(&guests);

        let matches = resolver.matches("jane doe");
        assert_eq!(matches.len(), 1);

        match resolver.lookup("jane doe", None) {
            Resolution::Resolved(guest) => assert_eq!(guest.table_label(), "3"),
            other => panic!("expected Resolved, got {other:?}"),
        }
    }

    #[test]
    fn test_match_ignores_case_and_whitespace() {
        let guests = guests();
        let resolver = Resolver::new(&guests);
        assert_eq!(resolver.matches(" Jane Doe "), resolver.matches("jane doe"));
        assert_eq!(resolver.matches("JANE DOE").len(), 1);
    }

    #[test]
    fn test_match_is_exact_not_substring() {
        let guests = guests();
        let resolver = Resolver::new(&guests);
        assert!(resolver.matches("jane").is_empty());
        assert!(resolver.matches("nonexistent person").is_empty());
        assert_eq!(
            resolver.lookup("nonexistent person", None),
            Resolution::NotFound
        );
    }

    #[test]
    fn test_blank_query_matches_nothing() {
        let guests = guests();
        let resolver = Resolver::new(&guests);
        assert!(resolver.matches("").is_empty());
        assert!(resolver.matches("   ").is_empty());
        assert_eq!(resolver.lookup("", Some("Jane Doe")), Resolution::NotFound);
    }

    #[test]
    fn test_relationship_match() {
        let guests = guests();
        let resolver = Resolver::new(&guests);
        let matches = resolver.matches("best man");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].placard_name, "John Smith");
        assert_eq!(matches[1].placard_name, "Alice Wong");
    }

    #[test]
    fn test_guest_without_relationship_matches_by_name() {
        let guests = guests();
        let resolver = Resolver::new(&guests);
        assert_eq!(resolver.matches("bob lee").len(), 1);
        assert!(resolver.matches("relationship n/a").is_empty());
    }

    #[test]
    fn test_ambiguous_then_disambiguated() {
        let guests = guests();
        let resolver = Resolver::new(&guests);

        let candidates = match resolver.lookup("john smith", None) {
            Resolution::Ambiguous { candidates } => candidates,
            other => panic!("expected Ambiguous, got {other:?}"),
        };
        let labels: Vec<_> = candidates.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["John Smith (Groom's Uncle)", "John Smith (Best Man)"]
        );

        match resolver.lookup("john smith", Some("John Smith (Best Man)")) {
            Resolution::Resolved(guest) => assert_eq!(guest.table_label(), "VIP"),
            other => panic!("expected Resolved, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_selection_stays_ambiguous() {
        let guests = guests();
        let resolver = Resolver::new(&guests);

        for selection in [None, Some(""), Some("Jane Doe (Bride's Aunt)")] {
            assert!(matches!(
                resolver.lookup("john smith", selection),
                Resolution::Ambiguous { .. }
            ));
        }
    }

    #[test]
    fn test_selection_ignored_for_single_match() {
        let guests = guests();
        let resolver = Resolver::new(&guests);
        match resolver.lookup("jane doe", Some("something stale")) {
            Resolution::Resolved(guest) => assert_eq!(guest.placard_name, "Jane Doe"),
            other => panic!("expected Resolved, got {other:?}"),
        }
    }

    #[test]
    fn test_identical_guests_get_distinct_labels() {
        let guests = vec![
            GuestRecord::new("Sam Park", Some("Cousin"), "4"),
            GuestRecord::new("Sam Park", Some("Cousin"), "7"),
            GuestRecord::new("Sam Park", None, "8"),
        ];
        let resolver = Resolver::new(&guests);

        let candidates = resolver.candidates("sam park");
        let labels: Vec<_> = candidates.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Sam Park (Cousin)", "Sam Park (Cousin) #2", "Sam Park"]);

        assert_eq!(resolve(&candidates, "Sam Park (Cousin) #2").unwrap().table_id, "7");
        assert_eq!(resolve(&candidates, "Sam Park").unwrap().table_id, "8");
        assert!(resolve(&candidates, "Sam Park #3").is_none());
    }
}
