//! Report formatting and printing.
//!
//! Keeps all terminal output in one place so the command bodies stay pure
//! orchestration. Colors come from `colored`, which honors `NO_COLOR`.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::{
    extract::{Extraction, MergedLocale},
    issues::{Issue, Severity},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the per-language outcome of a sync/build run.
pub fn print_extraction(task: &str, source_files: usize, result: &Extraction, verbose: bool) {
    print_extraction_to(
        task,
        source_files,
        result,
        verbose,
        &mut io::stdout().lock(),
    );
}

/// Print an extraction report to a custom writer. Useful for testing.
pub fn print_extraction_to<W: Write>(
    task: &str,
    source_files: usize,
    result: &Extraction,
    verbose: bool,
    writer: &mut W,
) {
    for locale in &result.locales {
        let _ = writeln!(
            writer,
            "  {}: {} keys{}",
            locale.record.lang().bold(),
            locale.record.len(),
            locale_changes(locale)
        );
        if verbose {
            print_locale_detail(locale, writer);
        }
    }

    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "{}: scanned {} template {}, wrote {} locale {}",
            task,
            source_files,
            plural(source_files, "file"),
            result.written.len(),
            plural(result.written.len(), "file"),
        )
        .green()
    );
}

fn locale_changes(locale: &MergedLocale) -> String {
    let mut parts = Vec::new();
    if !locale.added.is_empty() {
        parts.push(format!("{} added", locale.added.len()));
    }
    if !locale.backfilled.is_empty() {
        parts.push(format!("{} back-filled", locale.backfilled.len()));
    }
    if !locale.untouched.is_empty() {
        parts.push(format!("{} untouched", locale.untouched.len()));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

fn print_locale_detail<W: Write>(locale: &MergedLocale, writer: &mut W) {
    // Align values after the widest key so the listing scans as a table.
    let width = locale
        .added
        .iter()
        .chain(&locale.backfilled)
        .chain(&locale.untouched)
        .map(|k| k.width())
        .max()
        .unwrap_or(0);

    for key in &locale.added {
        let _ = writeln!(writer, "    {} {}", "+".green(), pad(key, width));
    }
    for key in &locale.backfilled {
        let _ = writeln!(writer, "    {} {}", "~".cyan(), pad(key, width));
    }
    for key in &locale.untouched {
        let value = locale
            .record
            .get(key)
            .map(|e| e.value.as_str())
            .unwrap_or_default();
        let _ = writeln!(
            writer,
            "    {} {} {:?}",
            "!".yellow(),
            pad(key, width),
            value
        );
    }
}

/// Print check issues and a summary line. Returns true if any issue is an
/// error (as opposed to a warning).
pub fn print_check(issues: &[Issue], source_files: usize, locale_files: usize) -> bool {
    print_check_to(issues, source_files, locale_files, &mut io::stdout().lock())
}

pub fn print_check_to<W: Write>(
    issues: &[Issue],
    source_files: usize,
    locale_files: usize,
    writer: &mut W,
) -> bool {
    if issues.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} template {}, {} locale {} - no issues found",
                source_files,
                plural(source_files, "file"),
                locale_files,
                plural(locale_files, "file"),
            )
            .green()
        );
        return false;
    }

    for issue in issues {
        let severity = match issue.severity() {
            Severity::Error => "error:".bold().red(),
            Severity::Warning => "warning:".bold().yellow(),
        };
        let _ = writeln!(writer, "{} {}", severity, issue);
    }

    let error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let warning_count = issues.len() - error_count;

    let mut parts = Vec::new();
    if error_count > 0 {
        parts.push(format!("{} {}", error_count, plural(error_count, "error")));
    }
    if warning_count > 0 {
        parts.push(format!(
            "{} {}",
            warning_count,
            plural(warning_count, "warning")
        ));
    }
    let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), parts.join(", ").red());

    error_count > 0
}

fn pad(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
