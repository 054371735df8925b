//! `lingo build` - emit bundling locale files.
//!
//! Writes each language's locale file into the output directory with only
//! the currently referenced keys, back-filling gaps from the default
//! language so the shipped bundle never shows an empty string.

use std::path::PathBuf;

use anyhow::Result;

use super::context::TaskContext;
use crate::{
    cli::{ExitStatus, args::BuildCommand, args::format_extension, report},
    extract::{ExtractOptions, extract},
};

pub fn build(cmd: BuildCommand) -> Result<ExitStatus> {
    let args = &cmd.args;
    let ctx = TaskContext::new(&args.common)?;

    let out_dir = args
        .out_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&ctx.config.out_dir));

    let opts = ExtractOptions {
        base: ctx.source_root.clone(),
        dest: out_dir,
        prefix: ctx.config.locales_dir.clone(),
        touched_only: true,
        use_default_lang: true,
        mark_untouched: false,
        extension: format_extension(args.format.as_deref(), ".json"),
        default_locale: ctx.config.default_locale.clone(),
    };

    let result = extract(&ctx.files, &ctx.matcher, &opts)?;
    report::print_extraction("build", ctx.files.len(), &result, ctx.verbose);

    Ok(ExitStatus::Success)
}
