//! Report formatting and printing utilities.
//!
//! Command output goes to stdout. Issues go to stdout for `check` and to
//! stderr for everything else, so `get`, `keys` and `export` stay pipeable.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use super::commands::{
    CatalogIssue, CheckSummary, CommandResult, CommandSummary, EditSummary, ExportSummary,
    InitSummary, Severity,
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command result to stdout/stderr.
pub fn print(result: &CommandResult) {
    let mut stdout = io::stdout().lock();
    match &result.summary {
        CommandSummary::Check(summary) => {
            print_check_to(summary, &result.issues, &mut stdout);
        }
        summary => {
            print_summary_to(summary, &mut stdout);
            report_to(&result.issues, &mut io::stderr().lock());
        }
    }
}

/// Print issues followed by a problem count.
pub fn report_to<W: Write>(issues: &[CatalogIssue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }
    for issue in issues {
        print_issue(issue, writer);
    }
    print_problem_count(issues, writer);
}

pub fn print_check_to<W: Write>(summary: &CheckSummary, issues: &[CatalogIssue], writer: &mut W) {
    if issues.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {}: {} {}, {} {} - no issues found",
                display_name(&summary.catalog),
                summary.languages,
                plural(summary.languages, "language", "languages"),
                summary.keys,
                plural(summary.keys, "key", "keys"),
            )
            .green()
        );
        return;
    }
    report_to(issues, writer);
}

pub fn print_summary_to<W: Write>(summary: &CommandSummary, writer: &mut W) {
    match summary {
        CommandSummary::Init(InitSummary { path }) => {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Created {}", display_name(path)).green()
            );
        }
        CommandSummary::Check(summary) => print_check_to(summary, &[], writer),
        CommandSummary::Languages(items) | CommandSummary::Keys(items) => {
            for item in items {
                let _ = writeln!(writer, "{}", item);
            }
        }
        CommandSummary::Get(text) => {
            if let Some(text) = text {
                let _ = writeln!(writer, "{}", text);
            }
        }
        CommandSummary::Edit(EditSummary { catalog, change }) => {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("{} in {}", change, display_name(catalog)).green()
            );
        }
        CommandSummary::Export(ExportSummary::Stdout(document)) => {
            let _ = writeln!(writer, "{}", document);
        }
        CommandSummary::Export(ExportSummary::File(path)) => {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Exported catalog to {}", path.display()).green()
            );
        }
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &CatalogIssue, writer: &mut W) {
    let severity = match issue.severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };
    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity,
        issue.message(),
        issue.rule().dimmed().cyan()
    );
}

fn print_problem_count<W: Write>(issues: &[CatalogIssue], writer: &mut W) {
    let errors = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let warnings = issues.len() - errors;
    let _ = writeln!(
        writer,
        "\n{} {} {} ({} {}, {} {})",
        FAILURE_MARK.red(),
        issues.len(),
        plural(issues.len(), "problem", "problems"),
        errors,
        plural(errors, "error", "errors").red(),
        warnings,
        plural(warnings, "warning", "warnings").yellow()
    );
}

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
