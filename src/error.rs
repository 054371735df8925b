//! Error types for the extraction core.
//!
//! The library surfaces three failure conditions: a locale file that cannot
//! be parsed in its declared format, an I/O failure naming the offending
//! path, and an invalid configuration value. All of them abort the run;
//! there are no retries.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// An existing locale file could not be parsed in its declared format.
    ///
    /// A corrupt locale file must never be silently overwritten, so this
    /// aborts the run before the write phase starts.
    #[error("failed to parse locale file {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    /// A source file could not be read, or an output path could not be written.
    #[error("failed to {action} {}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An unrecognized option value, reported before any file I/O.
    #[error("{0}")]
    Config(String),
}

impl ExtractError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action: "read",
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action: "write",
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
