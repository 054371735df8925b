//! Locale file discovery and parsing.
//!
//! Languages are the subdirectories of `<base>/<prefix>`; each one holds a
//! `message.json` or `message.yml`. Nested mappings are flattened to
//! dot-separated keys so the rest of the pipeline only ever sees a flat
//! key → string mapping.

use std::{fs, path::Path};

use crate::error::{ExtractError, Result};

use super::{Format, LocaleRecord, MESSAGE_STEM, MessageEntry, UNTOUCHED_MARK};

/// Load every language's record under `base/prefix`.
///
/// The default locale is always present in the result, as an empty record
/// when its file does not exist yet. Records are sorted by language code so
/// downstream phases run in a deterministic order.
///
/// When a language directory holds both `message.json` and `message.yml`,
/// the file matching `preferred` wins.
pub fn load_locales(
    base: &Path,
    prefix: &str,
    default_locale: &str,
    preferred: Format,
) -> Result<Vec<LocaleRecord>> {
    let locales_dir = base.join(prefix);
    let mut records: Vec<LocaleRecord> = Vec::new();

    if locales_dir.is_dir() {
        let dir_entries =
            fs::read_dir(&locales_dir).map_err(|e| ExtractError::read(&locales_dir, e))?;
        for entry in dir_entries {
            let entry = entry.map_err(|e| ExtractError::read(&locales_dir, e))?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let Some(lang) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            match locale_file_in(&path, preferred) {
                Some(file) => records.push(parse_locale_file(&file, lang)?),
                None => records.push(LocaleRecord::new(lang)),
            }
        }
    }

    if !records.iter().any(|r| r.lang() == default_locale) {
        records.push(LocaleRecord::new(default_locale));
    }

    records.sort_by(|a, b| a.lang().cmp(b.lang()));
    Ok(records)
}

/// Find the locale file in a language directory, preferring the configured
/// output format.
fn locale_file_in(lang_dir: &Path, preferred: Format) -> Option<std::path::PathBuf> {
    let candidates: [&str; 3] = match preferred {
        Format::Json => [".json", ".yml", ".yaml"],
        Format::Yaml => [".yml", ".yaml", ".json"],
    };
    candidates
        .iter()
        .map(|ext| lang_dir.join(format!("{}{}", MESSAGE_STEM, ext)))
        .find(|p| p.is_file())
}

/// Parse a single locale file into a record for `lang`.
///
/// The format is chosen from the file's own extension, not the configured
/// output format, so a `sync` run can migrate a tree from JSON to YAML.
pub fn parse_locale_file(path: &Path, lang: &str) -> Result<LocaleRecord> {
    let content = fs::read_to_string(path).map_err(|e| ExtractError::read(path, e))?;

    let flat = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => flatten_json(path, &content)?,
        Some("yml" | "yaml") => flatten_yaml(path, &content)?,
        _ => {
            return Err(ExtractError::Parse {
                path: path.to_path_buf(),
                reason: "unrecognized locale file extension".to_string(),
            });
        }
    };

    let mut record = LocaleRecord::new(lang);
    for (key, value) in flat {
        // An untouched mark written by a previous run is data about the key,
        // not part of the translation.
        let (value, untouched) = match value.strip_prefix(UNTOUCHED_MARK) {
            Some(stripped) => (stripped.to_string(), true),
            None => (value, false),
        };
        record.insert(key, MessageEntry { value, untouched });
    }
    Ok(record)
}

fn flatten_json(path: &Path, content: &str) -> Result<Vec<(String, String)>> {
    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|e| ExtractError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let serde_json::Value::Object(map) = value else {
        return Err(ExtractError::Parse {
            path: path.to_path_buf(),
            reason: "root of a locale file must be a mapping".to_string(),
        });
    };

    let mut flat = Vec::new();
    flatten_json_map(path, &map, String::new(), &mut flat)?;
    Ok(flat)
}

fn flatten_json_map(
    path: &Path,
    map: &serde_json::Map<String, serde_json::Value>,
    key_prefix: String,
    out: &mut Vec<(String, String)>,
) -> Result<()> {
    for (key, value) in map {
        let full_key = if key_prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", key_prefix, key)
        };
        match value {
            serde_json::Value::String(s) => out.push((full_key, s.clone())),
            serde_json::Value::Object(nested) => flatten_json_map(path, nested, full_key, out)?,
            serde_json::Value::Number(n) => out.push((full_key, n.to_string())),
            serde_json::Value::Bool(b) => out.push((full_key, b.to_string())),
            serde_json::Value::Null => out.push((full_key, String::new())),
            serde_json::Value::Array(_) => {
                return Err(ExtractError::Parse {
                    path: path.to_path_buf(),
                    reason: format!("key \"{}\" has an array value", full_key),
                });
            }
        }
    }
    Ok(())
}

fn flatten_yaml(path: &Path, content: &str) -> Result<Vec<(String, String)>> {
    // An empty YAML file deserializes to null; treat it as an empty record
    // rather than a parse failure.
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let value: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| ExtractError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let serde_yaml::Value::Mapping(map) = value else {
        return Err(ExtractError::Parse {
            path: path.to_path_buf(),
            reason: "root of a locale file must be a mapping".to_string(),
        });
    };

    let mut flat = Vec::new();
    flatten_yaml_map(path, &map, String::new(), &mut flat)?;
    Ok(flat)
}

fn flatten_yaml_map(
    path: &Path,
    map: &serde_yaml::Mapping,
    key_prefix: String,
    out: &mut Vec<(String, String)>,
) -> Result<()> {
    for (key, value) in map {
        let serde_yaml::Value::String(key) = key else {
            return Err(ExtractError::Parse {
                path: path.to_path_buf(),
                reason: "locale file keys must be strings".to_string(),
            });
        };
        let full_key = if key_prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", key_prefix, key)
        };
        match value {
            serde_yaml::Value::String(s) => out.push((full_key, s.clone())),
            serde_yaml::Value::Mapping(nested) => flatten_yaml_map(path, nested, full_key, out)?,
            serde_yaml::Value::Number(n) => out.push((full_key, n.to_string())),
            serde_yaml::Value::Bool(b) => out.push((full_key, b.to_string())),
            serde_yaml::Value::Null => out.push((full_key, String::new())),
            _ => {
                return Err(ExtractError::Parse {
                    path: path.to_path_buf(),
                    reason: format!("key \"{}\" has an unsupported value", full_key),
                });
            }
        }
    }
    Ok(())
}
