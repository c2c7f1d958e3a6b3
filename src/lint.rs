//! Lint runner: the in-memory engine entry point plus file orchestration.
//!
//! `lint_content` is pure. The remaining functions resolve inputs to files,
//! read them, and lint them in parallel, one counter and tree per file.

use crate::error::LintError;
use crate::markup::parse_document;
use crate::models::{ContentLint, FileOutcome, FileReport, LintRun, Summary, ViolationCount};
use crate::tree::{build_document, LabelStyle};
use glob::{glob, Pattern};
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Lint one HTML document held in memory.
pub fn lint_content(content: &str, style: LabelStyle) -> ContentLint {
    let document = parse_document(content);
    let mut count = ViolationCount::new();
    let tree = build_document(&document, &mut count, style);
    ContentLint {
        violation_count: count.get(),
        tree,
    }
}

/// Turn directory inputs into `<dir>/**/*.html` globs; other inputs pass through.
pub fn resolve_patterns(inputs: &[String]) -> Vec<String> {
    inputs
        .iter()
        .map(|input| {
            if Path::new(input).is_dir() {
                format!("{}/**/*.html", input.trim_end_matches('/'))
            } else {
                input.clone()
            }
        })
        .collect()
}

fn compile_excludes(excludes: &[String]) -> Result<Vec<Pattern>, LintError> {
    excludes
        .iter()
        .map(|pattern| {
            Pattern::new(pattern).map_err(|source| LintError::Pattern {
                pattern: pattern.clone(),
                source,
            })
        })
        .collect()
}

fn is_excluded(path: &Path, base: &Path, excludes: &[Pattern]) -> bool {
    let relative = path.strip_prefix(base).ok();
    excludes.iter().any(|pattern| {
        pattern.matches_path(path) || relative.is_some_and(|rel| pattern.matches_path(rel))
    })
}

/// Expand glob patterns into a sorted, de-duplicated list of files.
///
/// Paths matching any exclude glob, either as produced by the glob or
/// relative to `base`, are dropped.
pub fn collect_files(
    patterns: &[String],
    excludes: &[String],
    base: &Path,
) -> Result<Vec<PathBuf>, LintError> {
    let excludes = compile_excludes(excludes)?;
    let mut files: BTreeSet<PathBuf> = BTreeSet::new();
    for pattern in patterns {
        let entries = glob(pattern).map_err(|source| LintError::Pattern {
            pattern: pattern.clone(),
            source,
        })?;
        for path in entries.flatten() {
            if path.is_file() && !is_excluded(&path, base, &excludes) {
                files.insert(path);
            }
        }
    }
    Ok(files.into_iter().collect())
}

/// Read and lint a single file. Read failures become `FileOutcome::Failed`;
/// bytes that are not valid UTF-8 are replaced rather than rejected.
pub fn lint_file(path: &Path, style: LabelStyle) -> FileOutcome {
    let file = path.to_string_lossy().to_string();
    let content = match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            return FileOutcome::Failed {
                file,
                error: e.to_string(),
            }
        }
    };
    let ContentLint {
        violation_count,
        tree,
    } = lint_content(&content, style);
    if violation_count == 0 {
        return FileOutcome::Clean { file };
    }
    FileOutcome::Issues(FileReport {
        file,
        violations: violation_count,
        tree,
    })
}

/// Lint every file matched by `inputs` in parallel.
pub fn run_lint(
    inputs: &[String],
    excludes: &[String],
    base: &Path,
    style: LabelStyle,
) -> Result<LintRun, LintError> {
    if inputs.is_empty() {
        return Err(LintError::NoInputs);
    }
    let patterns = resolve_patterns(inputs);
    let files = collect_files(&patterns, excludes, base)?;
    if files.is_empty() {
        return Err(LintError::NoFiles);
    }
    let outcomes: Vec<FileOutcome> = files.par_iter().map(|p| lint_file(p, style)).collect();
    let summary = Summary::from_outcomes(&outcomes);
    Ok(LintRun { outcomes, summary })
}
