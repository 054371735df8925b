//! Stale key detection.

use crate::{extract::TouchedSet, issues::StaleKeyIssue, locales::LocaleRecord};

/// Find keys present in a locale record but absent from the current scan.
///
/// These are candidates for removal or review; the check command only
/// reports them, it never deletes. Output is sorted by language, then key.
pub fn check_stale_keys(touched: &TouchedSet, records: &[LocaleRecord]) -> Vec<StaleKeyIssue> {
    let mut issues: Vec<StaleKeyIssue> = records
        .iter()
        .flat_map(|record| {
            record
                .iter()
                .filter(|(key, _)| !touched.contains(key))
                .map(|(key, entry)| StaleKeyIssue {
                    lang: record.lang().to_string(),
                    key: key.to_string(),
                    value: entry.value.clone(),
                })
        })
        .collect();

    issues.sort();
    issues
}
