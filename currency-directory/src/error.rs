//! Directory loading errors.

use std::path::PathBuf;

/// Failure to load the currency directory.
///
/// Any of these halts startup: without the directory there is nothing to pick from.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("Currency data file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read currency data {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse currency data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid currency record #{index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("Failed to decode flag for {code}: {reason}")]
    InvalidFlag { code: String, reason: String },

    #[error("Duplicate currency code: {0}")]
    DuplicateCode(String),
}
