//! Lingo - locale extraction and sync for web-extension projects
//!
//! Lingo scans a project's template/source files for translation-key
//! references and reconciles them against the per-language locale files
//! under `<source root>/_locales/<lang>/message.json|yml`. It can update
//! the source tree for translators (`sync`), emit bundling locales into
//! the build output (`build`), or report drift without writing (`check`).
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `error`: Typed errors of the extraction core
//! - `extract`: Scan/merge/write extraction pipeline
//! - `issues`: Issue type definitions for the check command
//! - `locales`: Locale records and their on-disk formats
//! - `matcher`: Pluggable translation-key matchers
//! - `rules`: Check rules (missing translations, stale keys)
//! - `scanner`: Template file discovery

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod issues;
pub mod locales;
pub mod matcher;
pub mod rules;
pub mod scanner;
