//! Clipboard access for bulletin text.

use epimap_core::{Error, Result};

/// Read the current clipboard text.
///
/// An empty or non-text clipboard reads as the empty string, which flows
/// into the "nothing recognized" path downstream.
pub fn read_text() -> Result<String> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;

    match clipboard.get_text() {
        Ok(text) => Ok(text),
        Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
        Err(e) => Err(Error::Clipboard(e.to_string())),
    }
}
