//! Translation-key matchers.
//!
//! The exact syntax used to reference a translation key is a project
//! convention, so the scan phase treats it as a pluggable strategy: anything
//! implementing [`KeyMatcher`] can drive extraction. The default is a
//! regex-backed matcher whose patterns come from the config file.

use regex::Regex;

use crate::error::{ExtractError, Result};

/// Pattern matching `i18n('key')` / `i18n("key")` calls, the reference
/// convention used by the project templates this tool grew up with.
pub const DEFAULT_KEY_PATTERN: &str = r#"\bi18n\(\s*['"]([\w.-]+)['"]"#;

/// Strategy that yields the translation keys referenced by one file's
/// content, in appearance order. Duplicates are fine; the caller collapses
/// them.
pub trait KeyMatcher: Sync {
    fn extract_keys(&self, content: &str) -> Vec<String>;
}

/// Regex-driven matcher. Each pattern must contain exactly one capture
/// group, which yields the key. Matches from all patterns are ordered by
/// byte offset so first-seen order is well defined across patterns.
#[derive(Debug)]
pub struct RegexMatcher {
    patterns: Vec<Regex>,
}

impl RegexMatcher {
    pub fn new(patterns: &[String]) -> Result<Self> {
        if patterns.is_empty() {
            return Err(ExtractError::Config(
                "at least one key pattern is required".to_string(),
            ));
        }

        let mut compiled = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            let regex = Regex::new(pattern).map_err(|e| {
                ExtractError::Config(format!("invalid key pattern \"{}\": {}", pattern, e))
            })?;
            if regex.captures_len() != 2 {
                return Err(ExtractError::Config(format!(
                    "key pattern \"{}\" must have exactly one capture group",
                    pattern
                )));
            }
            compiled.push(regex);
        }
        Ok(Self { patterns: compiled })
    }
}

impl Default for RegexMatcher {
    fn default() -> Self {
        // The shipped pattern is known-good; construction cannot fail.
        match Self::new(&[DEFAULT_KEY_PATTERN.to_string()]) {
            Ok(matcher) => matcher,
            Err(_) => unreachable!("default key pattern failed to compile"),
        }
    }
}

impl KeyMatcher for RegexMatcher {
    fn extract_keys(&self, content: &str) -> Vec<String> {
        let mut hits: Vec<(usize, String)> = Vec::new();
        for regex in &self.patterns {
            for caps in regex.captures_iter(content) {
                if let Some(m) = caps.get(1) {
                    hits.push((m.start(), m.as_str().to_string()));
                }
            }
        }
        hits.sort_by_key(|(start, _)| *start);
        hits.into_iter().map(|(_, key)| key).collect()
    }
}
