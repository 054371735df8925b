//! Locale extraction and reconciliation.
//!
//! A three-phase pipeline with plain in-memory data between phases:
//!
//! 1. **Scan** (`scan`) - run every input file through the key matcher and
//!    accumulate the touched set, first-seen order
//! 2. **Merge** (`merge`) - reconcile each language's existing record
//!    against the touched set
//! 3. **Write** (`locales::writer`) - serialize the merged records to
//!    `dest/prefix/<lang>/message<extension>`

pub mod merge;
pub mod scan;

pub use merge::{MergedLocale, merge_language, merge_locales};
pub use scan::{TouchedSet, collect_touched};

use std::path::PathBuf;

use crate::{
    error::Result,
    locales::{self, Format},
    matcher::KeyMatcher,
};

/// Options recognized by [`extract`].
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Root directory holding the existing locale tree.
    pub base: PathBuf,
    /// Output root; `dest == base` updates the tree in place.
    pub dest: PathBuf,
    /// Subdirectory under which per-language locale files live.
    pub prefix: String,
    /// Output only the keys found in the current scan.
    pub touched_only: bool,
    /// Back-fill missing translations from the default language's record.
    pub use_default_lang: bool,
    /// Retain keys absent from the scan and flag them for review.
    pub mark_untouched: bool,
    /// Output serialization selector, `".json"` or `".yml"`.
    pub extension: String,
    /// Language whose record is authoritative for back-filling.
    pub default_locale: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            base: PathBuf::from("."),
            dest: PathBuf::from("."),
            prefix: "_locales".to_string(),
            touched_only: false,
            use_default_lang: false,
            mark_untouched: false,
            extension: ".yml".to_string(),
            default_locale: "en".to_string(),
        }
    }
}

impl ExtractOptions {
    /// Validate option values and resolve the output format.
    ///
    /// Runs before any file I/O so a bad configuration never touches disk.
    pub fn format(&self) -> Result<Format> {
        Format::from_extension(&self.extension)
    }
}

/// Result of a full extraction run.
#[derive(Debug)]
pub struct Extraction {
    pub touched: TouchedSet,
    pub locales: Vec<MergedLocale>,
    /// Paths written, one per language, in language order.
    pub written: Vec<PathBuf>,
}

/// Scan `files`, reconcile every language under `base/prefix`, and write the
/// updated locale files. Input files are never mutated.
pub fn extract(
    files: &[PathBuf],
    matcher: &dyn KeyMatcher,
    opts: &ExtractOptions,
) -> Result<Extraction> {
    let (touched, merged, format) = plan(files, matcher, opts)?;
    let records: Vec<_> = merged.iter().map(|m| m.record.clone()).collect();
    let written = locales::write_records(&records, &opts.dest, &opts.prefix, format)?;
    Ok(Extraction {
        touched,
        locales: merged,
        written,
    })
}

/// The scan and merge phases without the write, for dry runs.
pub fn plan(
    files: &[PathBuf],
    matcher: &dyn KeyMatcher,
    opts: &ExtractOptions,
) -> Result<(TouchedSet, Vec<MergedLocale>, Format)> {
    let format = opts.format()?;
    let touched = collect_touched(files, matcher)?;
    let existing =
        locales::load_locales(&opts.base, &opts.prefix, &opts.default_locale, format)?;
    let merged = merge_locales(&touched, &existing, opts);
    Ok((touched, merged, format))
}
