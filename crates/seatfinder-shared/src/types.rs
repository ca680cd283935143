use serde::{Deserialize, Serialize};

use crate::constants::RELATIONSHIP_UNAVAILABLE;

/// One row of the guest list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuestRecord {
    /// Name printed on the seating placard. Not unique.
    pub placard_name: String,
    /// Free-text relation to the couple, e.g. "Groom's Aunt".
    pub relationship: Option<String>,
    /// Table identifier as stored in the sheet.
    pub table_id: String,
}

impl GuestRecord {
    pub fn new(
        placard_name: impl Into<String>,
        relationship: Option<&str>,
        table_id: impl Into<String>,
    ) -> Self {
        Self {
            placard_name: placard_name.into(),
            relationship: relationship.map(str::to_string),
            table_id: table_id.into(),
        }
    }

    /// Table identifier as displayed and used for coordinate lookup.
    pub fn table_label(&self) -> String {
        self.table_id.trim().to_uppercase()
    }

    /// Label offered in the disambiguation dropdown.
    pub fn disambiguation_label(&self) -> String {
        match &self.relationship {
            Some(rel) => format!("{} ({})", self.placard_name, rel),
            None => self.placard_name.clone(),
        }
    }

    /// Relationship for display, or "Relationship N/A" when absent.
    pub fn group_label(&self) -> &str {
        self.relationship.as_deref().unwrap_or(RELATIONSHIP_UNAVAILABLE)
    }
}

impl std::fmt::Display for GuestRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ table {}", self.disambiguation_label(), self.table_label())
    }
}

/// Pixel position on the floor plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl From<(u32, u32)> for Point {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_label_uppercases() {
        let guest = GuestRecord::new("Jane Doe", None, " vip ");
        assert_eq!(guest.table_label(), "VIP");
    }

    #[test]
    fn test_disambiguation_label() {
        let with = GuestRecord::new("John Smith", Some("Best Man"), "2");
        let without = GuestRecord::new("John Smith", None, "2");
        assert_eq!(with.disambiguation_label(), "John Smith (Best Man)");
        assert_eq!(without.disambiguation_label(), "John Smith");
    }

    #[test]
    fn test_group_label_fallback() {
        let guest = GuestRecord::new("Jane Doe", None, "3");
        assert_eq!(guest.group_label(), "Relationship N/A");
    }
}
