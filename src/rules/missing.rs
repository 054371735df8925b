//! Missing translation detection.
//!
//! A key referenced in the current scan must have a non-empty value in every
//! language's record; anything else needs translator attention.

use crate::{
    extract::TouchedSet,
    issues::MissingTranslationIssue,
    locales::LocaleRecord,
};

/// Check every language for referenced keys without a translation.
///
/// A key counts as missing when it is absent from the record or present
/// with an empty value. Output is sorted by language, then key, for
/// deterministic reporting.
pub fn check_missing_translations(
    touched: &TouchedSet,
    records: &[LocaleRecord],
) -> Vec<MissingTranslationIssue> {
    let mut issues: Vec<MissingTranslationIssue> = records
        .iter()
        .flat_map(|record| {
            touched
                .iter()
                .filter(|key| record.get(key).is_none_or(|entry| entry.value.is_empty()))
                .map(|key| MissingTranslationIssue {
                    lang: record.lang().to_string(),
                    key: key.to_string(),
                })
        })
        .collect();

    issues.sort();
    issues
}
