//! Error types for obtaining bulletin text.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading bulletin text into the tool.
///
/// Extraction and normalization themselves never fail: an unrecognized
/// bulletin yields an empty span, not an error.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read bulletin text from a file or stdin.
    #[error("Failed to read bulletin: {0}")]
    Io(#[from] std::io::Error),

    /// The system clipboard could not be opened or read.
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}
