//! Locale file serialization and output.

use std::{fs, path::Path, path::PathBuf};

use crate::error::{ExtractError, Result};

use super::{Format, LocaleRecord, MESSAGE_STEM, UNTOUCHED_MARK};

/// Write each record to `dest/prefix/<lang>/message<extension>`, creating
/// parent directories as needed. Returns the written paths in record order.
pub fn write_records(
    records: &[LocaleRecord],
    dest: &Path,
    prefix: &str,
    format: Format,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(records.len());
    for record in records {
        let path = locale_path(dest, prefix, record.lang(), format);
        write_record(record, &path, format)?;
        written.push(path);
    }
    Ok(written)
}

/// Output path for one language's locale file.
pub fn locale_path(dest: &Path, prefix: &str, lang: &str, format: Format) -> PathBuf {
    dest.join(prefix)
        .join(lang)
        .join(format!("{}{}", MESSAGE_STEM, format.extension()))
}

fn write_record(record: &LocaleRecord, path: &Path, format: Format) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ExtractError::write(parent, e))?;
    }

    let content = serialize_record(record, format)
        .map_err(|e| ExtractError::write(path, std::io::Error::other(e)))?;

    fs::write(path, content).map_err(|e| ExtractError::write(path, e))
}

/// Serialize a record in the given format, with a trailing newline.
///
/// Untouched entries carry the [`UNTOUCHED_MARK`] prefix on their value so a
/// translator can spot stale keys; the reader strips it again on load.
pub fn serialize_record(
    record: &LocaleRecord,
    format: Format,
) -> std::result::Result<String, String> {
    match format {
        Format::Json => {
            // serde_json's preserve_order feature keeps insertion order here.
            let mut map = serde_json::Map::new();
            for (key, entry) in record.iter() {
                map.insert(
                    key.to_string(),
                    serde_json::Value::String(marked_value(entry.untouched, &entry.value)),
                );
            }
            serde_json::to_string_pretty(&serde_json::Value::Object(map))
                .map(|s| format!("{}\n", s))
                .map_err(|e| e.to_string())
        }
        Format::Yaml => {
            let mut map = serde_yaml::Mapping::new();
            for (key, entry) in record.iter() {
                map.insert(
                    serde_yaml::Value::String(key.to_string()),
                    serde_yaml::Value::String(marked_value(entry.untouched, &entry.value)),
                );
            }
            serde_yaml::to_string(&serde_yaml::Value::Mapping(map)).map_err(|e| e.to_string())
        }
    }
}

fn marked_value(untouched: bool, value: &str) -> String {
    if untouched {
        format!("{}{}", UNTOUCHED_MARK, value)
    } else {
        value.to_string()
    }
}
