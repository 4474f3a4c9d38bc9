//! Command-line parsing for the Gaussian sum plotter.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the math/summation code.
//!
//! Every knob of the summation has a flag whose default reproduces the
//! reference run exactly, so bare `gauss sum` plots the canonical curve.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{
    DEFAULT_AMP_SCALER, DEFAULT_AMPLITUDE, DEFAULT_C_COEFF, DEFAULT_GAUSS_SPACING,
    DEFAULT_GAUSS_START, DEFAULT_NUM_GAUSS, DEFAULT_NUM_X, DEFAULT_X_RANGE,
};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "gauss", version, about = "Sum evenly spaced Gaussians and plot the result")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute the summed curve, print a summary, and plot/export it.
    Sum(SumArgs),
    /// Plot a previously exported curve JSON.
    Plot(PlotArgs),
    /// Launch the interactive TUI.
    ///
    /// This uses the same summation pipeline as `gauss sum`, but renders the
    /// curve in a terminal UI and lets you vary spacing/width live.
    Tui(SumArgs),
}

/// Common options for summation.
#[derive(Debug, Parser, Clone)]
pub struct SumArgs {
    /// Number of sample points on the x grid.
    #[arg(short = 'n', long, default_value_t = DEFAULT_NUM_X)]
    pub num_x: usize,

    /// Lower bound of the x range (inclusive).
    #[arg(long, default_value_t = DEFAULT_X_RANGE.0)]
    pub x_min: f64,

    /// Upper bound of the x range (inclusive).
    #[arg(long, default_value_t = DEFAULT_X_RANGE.1)]
    pub x_max: f64,

    /// Position of the first Gaussian center.
    #[arg(long, default_value_t = DEFAULT_GAUSS_START)]
    pub gauss_start: f64,

    /// Spacing between consecutive Gaussian centers.
    #[arg(short = 's', long, default_value_t = DEFAULT_GAUSS_SPACING)]
    pub gauss_spacing: f64,

    /// Number of Gaussians to sum (0 is allowed and yields a flat zero curve).
    #[arg(short = 'g', long, default_value_t = DEFAULT_NUM_GAUSS)]
    pub num_gauss: usize,

    /// Per-Gaussian amplitude before scaling.
    #[arg(short = 'a', long, default_value_t = DEFAULT_AMPLITUDE)]
    pub amplitude: f64,

    /// Width coefficient: each Gaussian's width is `spacing * c_coeff`.
    ///
    /// Not validated; zero or negative values produce inf/nan samples that
    /// flow straight into the plot.
    #[arg(short = 'c', long, default_value_t = DEFAULT_C_COEFF)]
    pub c_coeff: f64,

    /// Scaler applied to each Gaussian's contribution, offsetting the
    /// amplitude increase from overlap. Tuned for c_coeff = 0.6.
    #[arg(long, default_value_t = DEFAULT_AMP_SCALER)]
    pub amp_scaler: f64,

    /// Render an ASCII plot in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Export curve samples to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the curve (config + sampled grid) to JSON.
    #[arg(long = "export-curve")]
    pub export_curve: Option<PathBuf>,
}

/// Options for plotting a saved curve.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Curve JSON file produced by `gauss sum --export-curve`.
    #[arg(long, value_name = "JSON")]
    pub curve: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}
