//! Guest directory backed by a CSV export of the seating sheet.
//!
//! The [`GuestDirectory`] is built once at startup and never mutated. Header
//! names are trimmed before the required columns are located, so
//! `" Placard Name "` is accepted. The relationship column is optional;
//! without it every guest has `relationship: None`.

use std::io::Read;
use std::path::Path;

use seatfinder_shared::constants::{COLUMN_PLACARD_NAME, COLUMN_RELATIONSHIP, COLUMN_TABLE};
use seatfinder_shared::GuestRecord;
use tracing::{info, warn};

use crate::error::{DirectoryError, Result};

#[derive(Debug, Clone, Default)]
pub struct GuestDirectory {
    guests: Vec<GuestRecord>,
    search_terms: Vec<String>,
    has_relationship_column: bool,
}

struct Columns {
    placard_name: usize,
    table: usize,
    relationship: Option<usize>,
}

impl Columns {
    fn locate(headers: &csv::StringRecord) -> Result<Self> {
        let position = |name: &str| headers.iter().position(|h| h.trim() == name);

        Ok(Self {
            placard_name: position(COLUMN_PLACARD_NAME)
                .ok_or(DirectoryError::MissingColumn(COLUMN_PLACARD_NAME))?,
            table: position(COLUMN_TABLE).ok_or(DirectoryError::MissingColumn(COLUMN_TABLE))?,
            relationship: position(COLUMN_RELATIONSHIP),
        })
    }
}

/// Trimmed cell value, `None` when absent or blank.
fn cell(row: &csv::StringRecord, idx: usize) -> Option<&str> {
    row.get(idx).map(str::trim).filter(|s| !s.is_empty())
}

impl GuestDirectory {
    /// An empty directory, used when the data file is unavailable.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the guest list from a CSV file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DirectoryError::NotFound(path.to_path_buf()));
        }

        let file = std::fs::File::open(path)?;
        let directory = Self::from_reader(file)?;

        info!(
            path = %path.display(),
            guests = directory.len(),
            relationships = directory.has_relationship_column,
            "Guest directory loaded"
        );
        Ok(directory)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let columns = Columns::locate(&headers)?;

        let mut guests = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let row = result?;
            // Line 1 is the header.
            let line = idx + 2;

            let Some(placard_name) = cell(&row, columns.placard_name) else {
                warn!(line, "Skipping guest row without a placard name");
                continue;
            };
            let Some(table_id) = cell(&row, columns.table) else {
                warn!(line, placard_name, "Skipping guest row without a table");
                continue;
            };
            let relationship = columns.relationship.and_then(|col| cell(&row, col));

            guests.push(GuestRecord::new(placard_name, relationship, table_id));
        }

        Ok(Self::from_guests(guests, columns.relationship.is_some()))
    }

    pub fn from_guests(guests: Vec<GuestRecord>, has_relationship_column: bool) -> Self {
        let search_terms = build_search_terms(&guests);
        Self {
            guests,
            search_terms,
            has_relationship_column,
        }
    }

    pub fn guests(&self) -> &[GuestRecord] {
        &self.guests
    }

    /// Deduplicated names and relationships, sorted case-insensitively.
    pub fn search_terms(&self) -> &[String] {
        &self.search_terms
    }

    pub fn has_relationship_column(&self) -> bool {
        self.has_relationship_column
    }

    pub fn len(&self) -> usize {
        self.guests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guests.is_empty()
    }
}

fn build_search_terms(guests: &[GuestRecord]) -> Vec<String> {
    let mut terms: Vec<String> = guests
        .iter()
        .flat_map(|g| std::iter::once(g.placard_name.as_str()).chain(g.relationship.as_deref()))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    terms.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)));
    terms.dedup();
    terms
}
