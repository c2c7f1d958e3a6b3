//! Output rendering for lint runs.
//!
//! Supports `human` (default) and `json` outputs. The human form prints the
//! annotated tree of every file with issues; the JSON form includes per-file
//! trees, read failures, and a top-level summary.

use crate::ascii::render;
use crate::config::OutputMode;
use crate::models::{FileOutcome, FileReport, LintRun, Summary};
use crate::utils::display_path;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;
use std::io::{self, Write};

/// Print lint results in the requested format.
///
/// JSON goes to stdout. Human reports, read failures and the summary go to
/// stderr, keeping stdout free for machine-readable output.
pub fn print_lint(run: &LintRun, output: OutputMode, color: bool) {
    let stdout = io::stdout();
    let stderr = io::stderr();
    let _ = print_lint_to(run, output, color, &mut stdout.lock(), &mut stderr.lock());
}

/// Write lint results to explicit streams.
pub fn print_lint_to<W: Write, E: Write>(
    run: &LintRun,
    output: OutputMode,
    color: bool,
    out: &mut W,
    err: &mut E,
) -> io::Result<()> {
    match output {
        OutputMode::Json => writeln!(
            out,
            "{}",
            serde_json::to_string_pretty(&compose_lint_json(run)).unwrap_or_default()
        ),
        OutputMode::Human => {
            for outcome in &run.outcomes {
                match outcome {
                    FileOutcome::Clean { .. } => {}
                    FileOutcome::Issues(report) => {
                        writeln!(err, "{}", compose_report(report, color))?
                    }
                    FileOutcome::Failed { file, error } => writeln!(
                        err,
                        "{} Error reading file {}: {}",
                        crate::utils::error_prefix(),
                        display_path(file),
                        error
                    )?,
                }
            }
            let summary = compose_summary(&run.summary);
            if color {
                writeln!(err, "{}", summary.bold())
            } else {
                writeln!(err, "{}", summary)
            }
        }
    }
}

/// Human report for one file: blank line, tree, blank line, footer.
pub fn compose_report(report: &FileReport, color: bool) -> String {
    let footer = format!(
        "File: {}\nbemlint: {} issue{} found!",
        display_path(&report.file),
        report.violations,
        if report.violations > 1 { "s" } else { "" }
    );
    let footer = if color {
        footer.red().to_string()
    } else {
        footer
    };
    format!("\n{}\n\n{}", render(&report.tree), footer)
}

pub fn compose_summary(summary: &Summary) -> String {
    format!(
        "— Summary — files={} with_issues={} violations={} failed={}",
        summary.files, summary.files_with_issues, summary.violations, summary.failed
    )
}

/// Compose lint JSON object (pure) for testing/snapshot purposes.
pub fn compose_lint_json(run: &LintRun) -> JsonVal {
    let files: Vec<_> = run
        .outcomes
        .iter()
        .filter_map(|o| match o {
            FileOutcome::Issues(report) => Some(json!({
                "file": display_path(&report.file),
                "violations": report.violations,
                "tree": report.tree,
            })),
            _ => None,
        })
        .collect();
    let errors: Vec<_> = run
        .outcomes
        .iter()
        .filter_map(|o| match o {
            FileOutcome::Failed { file, error } => Some(json!({
                "file": display_path(file),
                "message": error,
            })),
            _ => None,
        })
        .collect();
    json!({
        "files": files,
        "errors": errors,
        "summary": run.summary,
    })
}
