//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "bemlint",
    version,
    disable_version_flag = true,
    about = "CLI tool for HTML linting using BEM methodology.",
    long_about = "bemlint — checks class attributes in HTML files against the BEM naming convention and prints an annotated element tree for every file with issues.\n\nConfiguration precedence: CLI > bemlint.toml > defaults.",
    after_help = "Examples:\n  bemlint index.html\n  bemlint \"src/**/*.html\"\n  bemlint \"dist/**/*.html\" \"build/**/*.html\"\n  bemlint src --exclude \"src/vendor/**\" --output json\n\nExit codes:\n  0  No BEM issues found\n  1  BEM issues found, unreadable files, or no input\n  2  Invalid configuration"
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(help = "Files, directories, or glob patterns to lint")]
    pub patterns: Vec<String>,
    #[arg(long, value_name = "GLOB", help = "Skip files matching this glob (repeatable)")]
    pub exclude: Vec<String>,
    #[arg(long, help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Disable colored output")]
    pub no_color: bool,
    #[arg(long, help = "Directory where config discovery starts (default: current dir)")]
    pub root: Option<String>,
    #[arg(short = 'v', long, action = clap::ArgAction::Version, help = "Print version")]
    version: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_patterns_and_flags() {
        let cli = Cli::try_parse_from([
            "bemlint",
            "a.html",
            "src",
            "--exclude",
            "x/**",
            "--exclude",
            "y/**",
            "--output",
            "json",
            "--no-color",
        ])
        .unwrap();
        assert_eq!(cli.patterns, vec!["a.html", "src"]);
        assert_eq!(cli.exclude, vec!["x/**", "y/**"]);
        assert_eq!(cli.output.as_deref(), Some("json"));
        assert!(cli.no_color);
        assert!(cli.root.is_none());
    }

    #[test]
    fn test_no_arguments_is_allowed() {
        let cli = Cli::try_parse_from(["bemlint"]).unwrap();
        assert!(cli.patterns.is_empty());
    }

    #[test]
    fn test_short_and_long_version_flags() {
        for flag in ["-v", "--version"] {
            let err = Cli::try_parse_from(["bemlint", flag]).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
        }
    }
}
