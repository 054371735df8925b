//! Issue types reported by the check command.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A key referenced by the scan with no translation in some language.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MissingTranslationIssue {
    pub lang: String,
    pub key: String,
}

/// A key present in a locale file but no longer referenced anywhere.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct StaleKeyIssue {
    pub lang: String,
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    MissingTranslation(MissingTranslationIssue),
    StaleKey(StaleKeyIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::MissingTranslation(_) => Severity::Error,
            Issue::StaleKey(_) => Severity::Warning,
        }
    }

    pub fn lang(&self) -> &str {
        match self {
            Issue::MissingTranslation(i) => &i.lang,
            Issue::StaleKey(i) => &i.lang,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Issue::MissingTranslation(i) => &i.key,
            Issue::StaleKey(i) => &i.key,
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::MissingTranslation(i) => {
                write!(
                    f,
                    "missing translation: {} has no value for \"{}\"",
                    i.lang, i.key
                )
            }
            Issue::StaleKey(i) => {
                write!(f, "stale key: {} \"{}\" is no longer referenced", i.lang, i.key)
            }
        }
    }
}
