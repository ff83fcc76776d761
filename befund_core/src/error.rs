//! Error types for the befund_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for befund_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A catalog row is missing a required field or carries a malformed one.
    /// `row` is the line number in the source file (header is line 1).
    #[error("Catalog load error in row {row}: {message}")]
    CatalogLoad { row: usize, message: String },

    /// System clipboard could not be used
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
