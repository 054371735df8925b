//! `lingo sync` - update the source-tree locale files.
//!
//! The translator-facing task: keys referenced by the current templates are
//! merged into every language's locale file in place. Stale keys are
//! retained and flagged unless `--touched-only` prunes them.

use anyhow::Result;

use super::context::TaskContext;
use crate::{
    cli::{ExitStatus, args::SyncCommand, args::format_extension, report},
    extract::{ExtractOptions, extract},
};

pub fn sync(cmd: SyncCommand) -> Result<ExitStatus> {
    let args = &cmd.args;
    let ctx = TaskContext::new(&args.common)?;

    let opts = ExtractOptions {
        base: ctx.source_root.clone(),
        dest: ctx.source_root.clone(),
        prefix: ctx.config.locales_dir.clone(),
        touched_only: args.touched_only,
        use_default_lang: args.use_default_lang,
        // --touched-only prunes stale keys instead of flagging them.
        mark_untouched: !args.touched_only,
        extension: format_extension(args.format.as_deref(), ".yml"),
        default_locale: ctx.config.default_locale.clone(),
    };

    let result = extract(&ctx.files, &ctx.matcher, &opts)?;
    report::print_extraction("sync", ctx.files.len(), &result, ctx.verbose);

    Ok(ExitStatus::Success)
}
