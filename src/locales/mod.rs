//! Locale records and their on-disk representation.
//!
//! A locale record is an insertion-ordered mapping from translation key to
//! localized string for one language. Records are read from
//! `<base>/<prefix>/<lang>/message.json|yml`, merged in memory, and written
//! back out; nothing persists between runs.
//!
//! ## Module Structure
//!
//! - `format`: `.json`/`.yml` output format selection
//! - `reader`: locale directory discovery and file parsing
//! - `writer`: serialization and file output

pub mod format;
pub mod reader;
pub mod writer;

pub use format::Format;
pub use reader::{load_locales, parse_locale_file};
pub use writer::write_records;

use std::collections::HashMap;

/// File stem of every locale file: `message.json`, `message.yml`.
pub const MESSAGE_STEM: &str = "message";

/// Prefix stored on the value of a key that was retained but not found in
/// the current scan. Stripped again when the file is loaded, so a second
/// run over its own output is byte-identical.
pub const UNTOUCHED_MARK: &str = "[untouched] ";

/// A single translation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEntry {
    pub value: String,
    /// True if the key was retained from the previous record without being
    /// found in the current scan.
    pub untouched: bool,
}

impl MessageEntry {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            untouched: false,
        }
    }
}

/// Insertion-ordered mapping of translation keys to entries for one language.
///
/// Iteration order is the order keys were inserted, which the merge phase
/// relies on for deterministic output.
#[derive(Debug, Clone, Default)]
pub struct LocaleRecord {
    lang: String,
    keys: Vec<String>,
    entries: HashMap<String, MessageEntry>,
}

impl LocaleRecord {
    pub fn new(lang: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            keys: Vec::new(),
            entries: HashMap::new(),
        }
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&MessageEntry> {
        self.entries.get(key)
    }

    /// Insert an entry, keeping the first insertion's position if the key
    /// already exists.
    pub fn insert(&mut self, key: impl Into<String>, entry: MessageEntry) {
        let key = key.into();
        if self.entries.insert(key.clone(), entry).is_none() {
            self.keys.push(key);
        }
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MessageEntry)> {
        self.keys
            .iter()
            .map(|k| (k.as_str(), &self.entries[k]))
    }
}
