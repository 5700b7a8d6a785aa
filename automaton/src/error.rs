//! Error type shared by every part of the automaton engine.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while building or running an automaton.
#[derive(Debug, Error)]
pub enum Error {
    /// A bit string contained something other than `'0'` or `'1'`.
    #[error("unknown symbol {ch:?} at position {position}")]
    Parse {
        /// The offending character.
        ch: char,
        /// Character index inside the string.
        position: usize,
    },

    /// Invalid, missing or contradictory configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// A file could not be opened or read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A composition referenced a pattern missing from the library.
    #[error("pattern {0:?} not found")]
    NotFound(String),

    /// Input was well-formed but semantically unusable.
    #[error("validation error: {0}")]
    Validation(String),

    /// Row or column access outside the grid.
    #[error("index {index} out of range for length {len}")]
    Index {
        /// Requested index.
        index: usize,
        /// Length of the indexed dimension.
        len: usize,
    },

    /// Operation not permitted in the model's current mode.
    #[error("invalid state: {0}")]
    State(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
        if index < len {
            Ok(())
        } else {
            Err(Self::Index { index, len })
        }
    }
}

/// Result alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
