//! Output serialization format selection.

use std::fmt;

use crate::error::ExtractError;

/// On-disk encoding for locale files, selected by the `extension` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Parse an extension string (`.json`, `.yml`, `.yaml`) into a format.
    ///
    /// Anything else is a configuration error, reported before any file I/O.
    pub fn from_extension(extension: &str) -> Result<Self, ExtractError> {
        match extension {
            ".json" => Ok(Format::Json),
            ".yml" | ".yaml" => Ok(Format::Yaml),
            other => Err(ExtractError::Config(format!(
                "unknown locale file extension \"{}\" (expected \".json\" or \".yml\")",
                other
            ))),
        }
    }

    /// The file extension written for this format, with the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Json => ".json",
            Format::Yaml => ".yml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
