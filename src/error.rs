//! Error types for the lint runner and configuration loading.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LintError {
    #[error("No input patterns specified")]
    NoInputs,
    #[error("No HTML files found matching the specified patterns")]
    NoFiles,
    #[error("invalid glob pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML in {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid YAML in {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("unknown output mode '{0}' (expected human or json)")]
    Output(String),
}
