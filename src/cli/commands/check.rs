//! `lingo check` - dry run over the locale tree.
//!
//! Scans the templates and compares the touched set against every loaded
//! record without writing anything. Missing translations are errors; stale
//! keys are warnings.

use anyhow::Result;

use super::context::TaskContext;
use crate::{
    cli::{ExitStatus, args::CheckCommand, report},
    extract::collect_touched,
    issues::Issue,
    locales::{Format, load_locales},
    rules::{check_missing_translations, check_stale_keys},
};

pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let ctx = TaskContext::new(&cmd.args.common)?;

    let touched = collect_touched(&ctx.files, &ctx.matcher)?;
    let records = load_locales(
        &ctx.source_root,
        &ctx.config.locales_dir,
        &ctx.config.default_locale,
        Format::Yaml,
    )?;

    let missing = check_missing_translations(&touched, &records);
    let stale = check_stale_keys(&touched, &records);

    let mut issues: Vec<Issue> = Vec::new();
    issues.extend(missing.into_iter().map(Issue::MissingTranslation));
    issues.extend(stale.into_iter().map(Issue::StaleKey));

    let has_errors = report::print_check(&issues, ctx.files.len(), records.len());

    if has_errors {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}
