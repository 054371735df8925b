//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `sync`: update the source-tree locale files with the keys referenced
//!   by the current templates (additive, stale keys flagged)
//! - `build`: emit bundling locale files into the output directory
//! - `check`: report missing translations and stale keys without writing
//! - `init`: write a default `.lingorc.json` configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Locale directory name under the source root (overrides config file)
    #[arg(long)]
    pub locales_dir: Option<String>,

    /// Default language code (overrides config file)
    #[arg(long)]
    pub default_locale: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct SyncArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format: "json" or "yml" (default: yml)
    #[arg(long)]
    pub format: Option<String>,

    /// Drop keys that are no longer referenced instead of flagging them
    #[arg(long)]
    pub touched_only: bool,

    /// Fill missing translations from the default language
    #[arg(long)]
    pub use_default_lang: bool,
}

#[derive(Debug, Args)]
pub struct SyncCommand {
    #[command(flatten)]
    pub args: SyncArgs,
}

#[derive(Debug, Parser)]
pub struct BuildArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output directory (overrides config file)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Output format: "json" or "yml" (default: json)
    #[arg(long)]
    pub format: Option<String>,
}

#[derive(Debug, Args)]
pub struct BuildCommand {
    #[command(flatten)]
    pub args: BuildArgs,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Update source-tree locale files with the currently referenced keys
    Sync(SyncCommand),
    /// Write bundling locale files into the output directory
    Build(BuildCommand),
    /// Report missing translations and stale keys without writing anything
    Check(CheckCommand),
    /// Initialize a new .lingorc.json configuration file
    Init,
}

/// Normalize a `--format` value to an extension string: `yml` → `.yml`.
pub fn format_extension(format: Option<&str>, default: &str) -> String {
    match format {
        Some(f) if f.starts_with('.') => f.to_string(),
        Some(f) => format!(".{}", f),
        None => default.to_string(),
    }
}
