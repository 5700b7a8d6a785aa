//! File helpers for boundary conditions and pattern resources.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Reads a text file and joins all of its lines into a single string.
///
/// Line separators (`\n` and `\r\n`) are dropped, nothing else is touched, so
/// a bit string wrapped over several lines comes back in one piece.
pub fn read_and_join(path: impl AsRef<Path>) -> Result<String> {
    Ok(read_text(path)?.lines().collect())
}

/// Reads a whole text file.
pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}
