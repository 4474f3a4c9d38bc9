//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the summation pipeline
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, PlotArgs, SumArgs};
use crate::domain::SumConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `gauss` binary.
pub fn run() -> Result<(), AppError> {
    // We want `gauss` and `gauss -c 0.55` to behave like `gauss tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing. This preserves a clean clap structure while
    // retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Sum(args) => handle_sum(args),
        Command::Plot(args) => handle_plot(args),
        Command::Tui(args) => handle_tui(args),
    }
}

fn handle_sum(args: SumArgs) -> Result<(), AppError> {
    let config = sum_config_from_args(&args);
    let run = pipeline::run_sum(&config)?;

    println!(
        "{}",
        crate::report::format_run_summary(&config, &run.curve, &run.summary)
    );

    if args.plot && !args.no_plot {
        let plot = crate::plot::render_ascii_plot(&run.curve, args.width, args.height);
        println!("{plot}");
    }

    // Optional exports.
    if let Some(path) = &args.export {
        crate::io::export::write_samples_csv(path, &run.curve)?;
    }
    if let Some(path) = &args.export_curve {
        crate::io::curve::write_curve_json(path, &run.curve, &config)?;
    }

    Ok(())
}

fn handle_tui(args: SumArgs) -> Result<(), AppError> {
    crate::tui::run(sum_config_from_args(&args))
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let curve = crate::io::curve::read_curve_json(&args.curve)?;
    let plot = crate::plot::render_ascii_plot_from_curve_file(&curve, args.width, args.height);
    println!("{plot}");
    Ok(())
}

pub fn sum_config_from_args(args: &SumArgs) -> SumConfig {
    SumConfig {
        num_x: args.num_x,
        x_min: args.x_min,
        x_max: args.x_max,
        gauss_start: args.gauss_start,
        gauss_spacing: args.gauss_spacing,
        num_gauss: args.num_gauss,
        amplitude: args.amplitude,
        c_coeff: args.c_coeff,
        amp_scaler: args.amp_scaler,
    }
}

/// Rewrite argv so `gauss` defaults to `gauss tui`.
///
/// Rules:
/// - `gauss`                    -> `gauss tui`
/// - `gauss -c 0.55 ...`        -> `gauss tui -c 0.55 ...`
/// - `gauss --help/--version`   -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "sum" | "plot" | "tui");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_tui() {
        assert_eq!(rewrite_args(args(&["gauss"])), args(&["gauss", "tui"]));
        assert_eq!(
            rewrite_args(args(&["gauss", "-c", "0.55"])),
            args(&["gauss", "tui", "-c", "0.55"])
        );
    }

    #[test]
    fn subcommands_and_help_pass_through() {
        assert_eq!(
            rewrite_args(args(&["gauss", "sum", "--no-plot"])),
            args(&["gauss", "sum", "--no-plot"])
        );
        assert_eq!(rewrite_args(args(&["gauss", "--help"])), args(&["gauss", "--help"]));
    }
}
