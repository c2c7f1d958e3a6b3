//! Shared data models for the BEM engine and lint outputs.

pub mod violation;

pub use violation::{Violation, ViolationCount, Violations};

use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
/// One node of the display tree produced for a linted document.
///
/// The root carries no label when the document had no top-level elements.
pub struct LabelNode {
    pub label: Option<String>,
    pub nodes: Vec<LabelNode>,
}

impl LabelNode {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            nodes: Vec::new(),
        }
    }

    /// Builder-style helper used to assemble trees by hand.
    pub fn with_nodes(mut self, nodes: Vec<LabelNode>) -> Self {
        self.nodes = nodes;
        self
    }
}

#[derive(Debug, Clone, Default)]
/// Per-element state computed while walking the document.
pub struct ElementContext {
    /// Block names visible to this element; never mutated after creation.
    pub prefixes: BTreeSet<String>,
    pub violations: Violations,
}

#[derive(Debug, Clone)]
/// Result of linting one document held in memory.
pub struct ContentLint {
    pub violation_count: usize,
    pub tree: LabelNode,
}

#[derive(Debug, Clone, Serialize)]
/// Report for a file that has at least one violation.
pub struct FileReport {
    pub file: String,
    pub violations: usize,
    pub tree: LabelNode,
}

#[derive(Debug, Clone)]
/// Outcome of linting a single file.
pub enum FileOutcome {
    Clean { file: String },
    Issues(FileReport),
    Failed { file: String, error: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
/// Aggregated counts over a whole run.
pub struct Summary {
    pub files: usize,
    pub files_with_issues: usize,
    pub failed: usize,
    pub violations: usize,
}

impl Summary {
    pub fn from_outcomes(outcomes: &[FileOutcome]) -> Self {
        let mut summary = Summary {
            files: outcomes.len(),
            ..Summary::default()
        };
        for outcome in outcomes {
            match outcome {
                FileOutcome::Clean { .. } => {}
                FileOutcome::Issues(report) => {
                    summary.files_with_issues += 1;
                    summary.violations += report.violations;
                }
                FileOutcome::Failed { .. } => summary.failed += 1,
            }
        }
        summary
    }

    /// Whether the run should end with a failing exit status.
    pub fn is_failure(&self) -> bool {
        self.files_with_issues > 0 || self.failed > 0
    }
}

#[derive(Debug, Clone)]
/// All outcomes of one run plus their summary.
pub struct LintRun {
    pub outcomes: Vec<FileOutcome>,
    pub summary: Summary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts_each_outcome_kind() {
        let outcomes = vec![
            FileOutcome::Clean {
                file: "a.html".into(),
            },
            FileOutcome::Issues(FileReport {
                file: "b.html".into(),
                violations: 3,
                tree: LabelNode::default(),
            }),
            FileOutcome::Failed {
                file: "c.html".into(),
                error: "denied".into(),
            },
        ];
        let summary = Summary::from_outcomes(&outcomes);
        assert_eq!(summary.files, 3);
        assert_eq!(summary.files_with_issues, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.violations, 3);
        assert!(summary.is_failure());
    }

    #[test]
    fn test_clean_run_is_not_failure() {
        let summary = Summary::from_outcomes(&[FileOutcome::Clean {
            file: "a.html".into(),
        }]);
        assert!(!summary.is_failure());
    }
}
