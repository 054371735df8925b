//! Phase 1: scan input files into the touched set.
//!
//! Per-file extraction is pure, so files are scanned in parallel with rayon
//! and the results reduced sequentially in input-file order. That keeps the
//! touched set's first-seen order deterministic for a given file list.

use std::{collections::HashSet, fs, path::PathBuf};

use rayon::prelude::*;

use crate::{
    error::{ExtractError, Result},
    matcher::KeyMatcher,
};

/// Keys discovered by the current scan, in first-seen order.
#[derive(Debug, Default)]
pub struct TouchedSet {
    keys: Vec<String>,
    seen: HashSet<String>,
}

impl TouchedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key, keeping its first-seen position on repeats.
    pub fn insert(&mut self, key: impl Into<String>) {
        let key = key.into();
        if self.seen.insert(key.clone()) {
            self.keys.push(key);
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.seen.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterate keys in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for TouchedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for key in iter {
            set.insert(key);
        }
        set
    }
}

/// Scan every file and accumulate discovered keys into a [`TouchedSet`].
///
/// An unreadable file aborts the whole scan with the offending path.
pub fn collect_touched(files: &[PathBuf], matcher: &dyn KeyMatcher) -> Result<TouchedSet> {
    // Parallel map per file, then a sequential reduce in input order.
    let per_file: Vec<Result<Vec<String>>> = files
        .par_iter()
        .map(|path| {
            let content =
                fs::read_to_string(path).map_err(|e| ExtractError::read(path.clone(), e))?;
            Ok(file_keys(&content, matcher))
        })
        .collect();

    let mut touched = TouchedSet::new();
    for keys in per_file {
        for key in keys? {
            touched.insert(key);
        }
    }
    Ok(touched)
}

/// Extract one file's keys, collapsing duplicates within the file.
fn file_keys(content: &str, matcher: &dyn KeyMatcher) -> Vec<String> {
    let mut seen = HashSet::new();
    matcher
        .extract_keys(content)
        .into_iter()
        .filter(|key| seen.insert(key.clone()))
        .collect()
}
