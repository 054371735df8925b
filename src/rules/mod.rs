//! Check rules.
//!
//! Pure functions that compare the touched set against the loaded locale
//! records and return typed issues. Each function takes only the inputs it
//! needs so it stays trivially testable.
//!
//! - `missing`: referenced keys with no translation in some language
//! - `stale`: keys in a locale file that are no longer referenced

pub mod missing;
pub mod stale;

pub use missing::check_missing_translations;
pub use stale::check_stale_keys;
