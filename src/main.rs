//! bemlint CLI binary entry point.
//! Resolves configuration, runs the lint, prints results and sets the exit code.

use bemlint::cli::Cli;
use bemlint::config::{self, OutputMode};
use bemlint::error::LintError;
use bemlint::lint;
use bemlint::output;
use bemlint::tree::LabelStyle;
use bemlint::utils::{error_prefix, info_prefix, note_prefix, use_colors};
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    let eff = match config::resolve_effective(
        cli.root.as_deref(),
        &cli.patterns,
        &cli.exclude,
        cli.output.as_deref(),
        cli.no_color,
    ) {
        Ok(eff) => eff,
        Err(e) => {
            eprintln!("{} {}", error_prefix(), e);
            std::process::exit(2);
        }
    };

    let human = eff.output == OutputMode::Human;
    let color = human && use_colors(eff.color);
    if human {
        if eff.config_path.is_none() && eff.patterns.is_empty() {
            eprintln!("{} No bemlint.toml found; using defaults.", note_prefix());
        }
        if eff.patterns_from_config {
            eprintln!(
                "{} Using patterns from config: [{}]",
                info_prefix(),
                eff.patterns.join(", ")
            );
        }
    }

    let style = if color {
        LabelStyle::Colored
    } else {
        LabelStyle::Plain
    };
    match lint::run_lint(&eff.patterns, &eff.exclude, &eff.root, style) {
        Ok(run) => {
            output::print_lint(&run, eff.output, color);
            if run.summary.is_failure() {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{} {}", error_prefix(), e);
            if matches!(e, LintError::NoInputs) {
                eprintln!("Run `bemlint --help` for usage information");
            }
            std::process::exit(1);
        }
    }
}
