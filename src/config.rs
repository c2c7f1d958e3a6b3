//! Configuration discovery and effective settings resolution.
//!
//! bemlint reads `bemlint.toml|yaml|yml` from the starting directory (or the
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config.
//! Defaults:
//! - `patterns`: none (inputs must come from the CLI or the config file)
//! - `exclude`: `**/node_modules/**`
//! - `output`: `human`
//! - `color`: true
//!
//! Overrides precedence: CLI > config file > defaults. Exclude globs passed
//! on the CLI are appended to the configured ones.

use crate::error::ConfigError;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const CONFIG_FILES: [&str; 3] = ["bemlint.toml", "bemlint.yaml", "bemlint.yml"];
pub const DEFAULT_EXCLUDE: &str = "**/node_modules/**";

#[derive(Debug, Default, Deserialize, Clone, PartialEq, Eq)]
/// Root configuration loaded from `bemlint.toml|yaml`.
pub struct BemlintConfig {
    pub patterns: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
    pub output: Option<String>,
    pub color: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Human,
    Json,
}

impl FromStr for OutputMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(OutputMode::Human),
            "json" => Ok(OutputMode::Json),
            _ => Err(ConfigError::Output(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the runner after applying precedence.
pub struct Effective {
    pub root: PathBuf,
    /// Path of the config file that was loaded, if any.
    pub config_path: Option<PathBuf>,
    pub patterns: Vec<String>,
    /// True when `patterns` came from the config file rather than the CLI.
    pub patterns_from_config: bool,
    pub exclude: Vec<String>,
    pub output: OutputMode,
    pub color: bool,
}

/// Walk upward from `start` to detect the project root.
///
/// Stops when a `bemlint.toml|yaml|yml` or a `.git` directory is found.
/// Relative starts (including the default `.`) are resolved against the
/// current directory first so the walk can reach real ancestors.
pub fn detect_root(start: &Path) -> PathBuf {
    let cwd = env::current_dir().unwrap_or_default();
    detect_root_in(start, &cwd)
}

fn detect_root_in(start: &Path, cwd: &Path) -> PathBuf {
    let absolute: PathBuf = if start.is_absolute() {
        start.components().collect()
    } else {
        cwd.join(start).components().collect()
    };
    let mut cur = absolute.as_path();
    loop {
        if CONFIG_FILES.iter().any(|name| cur.join(name).is_file()) {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Find the config file under `root`, TOML first.
pub fn find_config(root: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| root.join(name))
        .find(|p| p.is_file())
}

/// Load `BemlintConfig` from `path`, choosing the parser by extension.
pub fn load_config(path: &Path) -> Result<BemlintConfig, ConfigError> {
    let s = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(&s).map_err(|source| ConfigError::Yaml {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => toml::from_str(&s).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_root: Option<&str>,
    cli_patterns: &[String],
    cli_exclude: &[String],
    cli_output: Option<&str>,
    cli_no_color: bool,
) -> Result<Effective, ConfigError> {
    let start = PathBuf::from(cli_root.unwrap_or("."));
    let root = detect_root(&start);
    let config_path = find_config(&root);
    let cfg = match config_path.as_deref() {
        Some(p) => load_config(p)?,
        None => BemlintConfig::default(),
    };

    let (patterns, patterns_from_config) = if !cli_patterns.is_empty() {
        (cli_patterns.to_vec(), false)
    } else {
        let from_cfg: Vec<String> = cfg
            .patterns
            .unwrap_or_default()
            .iter()
            .map(|p| {
                if Path::new(p).is_absolute() {
                    p.clone()
                } else {
                    root.join(p).to_string_lossy().to_string()
                }
            })
            .collect();
        let any = !from_cfg.is_empty();
        (from_cfg, any)
    };

    let mut exclude = cfg
        .exclude
        .unwrap_or_else(|| vec![DEFAULT_EXCLUDE.to_string()]);
    exclude.extend(cli_exclude.iter().cloned());

    let output = match cli_output.map(str::to_string).or(cfg.output) {
        Some(s) => s.parse::<OutputMode>()?,
        None => OutputMode::default(),
    };

    let color = !cli_no_color && cfg.color.unwrap_or(true);

    Ok(Effective {
        root,
        config_path,
        patterns,
        patterns_from_config,
        exclude,
        output,
        color,
    })
}
