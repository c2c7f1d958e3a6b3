//! Supporting helpers: diagnostic prefixes, color gating, path display.

use owo_colors::OwoColorize;
use std::path::Path;

/// Whether terminal colors should be used. `NO_COLOR` always wins.
pub fn use_colors(requested: bool) -> bool {
    requested && std::env::var_os("NO_COLOR").is_none()
}

pub fn error_prefix() -> String {
    if use_colors(true) {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

pub fn note_prefix() -> String {
    if use_colors(true) {
        "note:".yellow().bold().to_string()
    } else {
        "note:".to_string()
    }
}

pub fn info_prefix() -> String {
    if use_colors(true) {
        "info:".blue().bold().to_string()
    } else {
        "info:".to_string()
    }
}

/// Show `file` relative to the current directory when it lives below it.
pub fn display_path(file: &str) -> String {
    let path = Path::new(file);
    if path.is_relative() {
        return file.to_string();
    }
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| pathdiff::diff_paths(path, cwd));
    match relative {
        Some(rel) if !rel.starts_with("..") && !rel.as_os_str().is_empty() => {
            rel.to_string_lossy().to_string()
        }
        _ => file.to_string(),
    }
}
