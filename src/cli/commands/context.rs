//! Shared setup for the sync/build/check commands.

use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    matcher::RegexMatcher,
    scanner::scan_files,
};

/// Loaded configuration, scanned file list, and compiled matcher.
///
/// Built once per command from the config file (if any) with CLI overrides
/// applied on top.
pub struct TaskContext {
    pub config: Config,
    pub source_root: PathBuf,
    pub files: Vec<PathBuf>,
    pub matcher: RegexMatcher,
    pub verbose: bool,
}

impl TaskContext {
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let config_result = load_config(&cwd)?;

        if common.verbose && !config_result.from_file {
            eprintln!("Note: No .lingorc.json found, using default configuration");
        }

        let mut config = config_result.config;
        if let Some(root) = &common.source_root {
            config.source_root = root.to_string_lossy().into_owned();
        }
        if let Some(dir) = &common.locales_dir {
            config.locales_dir = dir.clone();
        }
        if let Some(locale) = &common.default_locale {
            config.default_locale = locale.clone();
        }

        let source_root = PathBuf::from(&config.source_root);
        let scan_result = scan_files(
            &source_root,
            &config.includes,
            &config.ignores,
            &config.locales_dir,
            common.verbose,
        );

        if scan_result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                scan_result.skipped_count,
                if common.verbose {
                    ""
                } else {
                    " (use -v for details)"
                }
            );
        }

        let matcher = RegexMatcher::new(&config.key_patterns)?;

        Ok(Self {
            config,
            source_root,
            files: scan_result.files,
            matcher,
            verbose: common.verbose,
        })
    }
}
