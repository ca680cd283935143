//! # seatfinder-store
//!
//! Read-only guest directory, loaded once from a CSV export of the seating
//! spreadsheet. Exposes the guest rows and the sorted search vocabulary
//! offered as suggestions in the query box.

pub mod directory;

mod error;

pub use directory::GuestDirectory;
pub use error::{DirectoryError, Result};
