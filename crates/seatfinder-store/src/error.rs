use std::path::PathBuf;

use thiserror::Error;

/// The guest list could not be loaded.
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// The data file does not exist.
    #[error("Data file not found at '{}'", .0.display())]
    NotFound(PathBuf),

    /// CSV parse or read failure.
    #[error("Error loading guest data: {0}")]
    Csv(#[from] csv::Error),

    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A required column is absent from the header row.
    #[error("Guest data is missing required column '{0}'")]
    MissingColumn(&'static str),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DirectoryError>;
