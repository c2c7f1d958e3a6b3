//! bemlint core library.
//!
//! This crate lints HTML class attributes against the BEM
//! (Block-Element-Modifier) naming convention and renders an annotated
//! element tree for every document with issues.
//!
//! High-level modules:
//! - `markup`: HTML parsing adapter producing an element/other node tree.
//! - `prefixes`: Block prefix inheritance down the tree.
//! - `checks`: The BEM naming rules applied per element.
//! - `tree`: Annotated label tree construction.
//! - `ascii`: Box-drawing rendering of label trees.
//! - `lint`: In-memory entry point plus file discovery and parallel runs.
//! - `config`: Discovery and effective configuration resolution.
//! - `cli`: CLI argument parsing (binary uses this).
//! - `output`: Human/JSON printers.
//! - `models`: Shared data types for violations, trees, and results.
//! - `utils`: Supporting helpers.
pub mod ascii;
pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod lint;
pub mod markup;
pub mod models;
pub mod output;
pub mod prefixes;
pub mod separators;
pub mod tree;
pub mod utils;

pub use lint::lint_content;
pub use models::{ContentLint, LabelNode, Violation};
pub use tree::LabelStyle;
