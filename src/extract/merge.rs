//! Phase 2: reconcile the touched set against each language's record.

use crate::locales::{LocaleRecord, MessageEntry};

use super::{ExtractOptions, scan::TouchedSet};

/// One language's merge outcome: the record to write plus what changed,
/// for reporting.
#[derive(Debug)]
pub struct MergedLocale {
    pub record: LocaleRecord,
    /// Keys newly introduced by this run (no previous translation).
    pub added: Vec<String>,
    /// Keys back-filled from the default language's record.
    pub backfilled: Vec<String>,
    /// Keys retained from the previous record but absent from the scan.
    pub untouched: Vec<String>,
}

/// Merge every language against the touched set.
///
/// The default language's existing record is the back-fill source, so it is
/// looked up before any merging starts.
pub fn merge_locales(
    touched: &TouchedSet,
    existing: &[LocaleRecord],
    opts: &ExtractOptions,
) -> Vec<MergedLocale> {
    let default_record = existing
        .iter()
        .find(|r| r.lang() == opts.default_locale);

    existing
        .iter()
        .map(|record| merge_language(touched, record, default_record, opts))
        .collect()
}

/// Merge a single language.
///
/// Output ordering is the touched keys in first-discovery order, followed by
/// any retained keys in their original order. A key is retained when
/// `touched_only` is false or `mark_untouched` is true; it is flagged only
/// in the latter case. A touched key takes its existing translation when
/// there is one, else the default language's value when `use_default_lang`,
/// else the empty string.
pub fn merge_language(
    touched: &TouchedSet,
    existing: &LocaleRecord,
    default_record: Option<&LocaleRecord>,
    opts: &ExtractOptions,
) -> MergedLocale {
    let mut record = LocaleRecord::new(existing.lang());
    let mut added = Vec::new();
    let mut backfilled = Vec::new();
    let mut untouched = Vec::new();

    for key in touched.iter() {
        match existing.get(key) {
            Some(entry) => record.insert(key, MessageEntry::new(entry.value.clone())),
            None => {
                let backfill = if opts.use_default_lang {
                    default_record
                        .and_then(|d| d.get(key))
                        .map(|e| e.value.clone())
                        .filter(|v| !v.is_empty())
                } else {
                    None
                };
                match backfill {
                    Some(value) => {
                        backfilled.push(key.to_string());
                        record.insert(key, MessageEntry::new(value));
                    }
                    None => {
                        added.push(key.to_string());
                        record.insert(key, MessageEntry::new(""));
                    }
                }
            }
        }
    }

    if !opts.touched_only || opts.mark_untouched {
        for (key, entry) in existing.iter() {
            if touched.contains(key) {
                continue;
            }
            untouched.push(key.to_string());
            record.insert(
                key,
                MessageEntry {
                    value: entry.value.clone(),
                    untouched: opts.mark_untouched,
                },
            );
        }
    }

    MergedLocale {
        record,
        added,
        backfilled,
        untouched,
    }
}
