//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during summation
//! - exported to JSON/CSV
//! - reloaded later for plotting or comparisons

use serde::{Deserialize, Serialize};

/// Default sample count for the x grid.
pub const DEFAULT_NUM_X: usize = 10_000;
/// Default x range to evaluate and plot over.
pub const DEFAULT_X_RANGE: (f64, f64) = (0.0, 12.0);
/// Default position of the first Gaussian center.
pub const DEFAULT_GAUSS_START: f64 = 2.0;
/// Default spacing between consecutive Gaussian centers.
pub const DEFAULT_GAUSS_SPACING: f64 = 0.4;
/// Default number of Gaussians to sum.
pub const DEFAULT_NUM_GAUSS: usize = 8;
/// Default per-Gaussian amplitude.
pub const DEFAULT_AMPLITUDE: f64 = 1.0;
/// Default width coefficient; each Gaussian's width is `spacing * c_coeff`.
pub const DEFAULT_C_COEFF: f64 = 0.6;
/// Empirical scaler that offsets the amplitude increase from overlapping
/// Gaussians. Roughly `1 - c_coeff^2`, but tuned by eye for `c_coeff = 0.6`;
/// the literal is what matters, not the approximation.
pub const DEFAULT_AMP_SCALER: f64 = 0.6649;

/// All parameters of one summation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SumConfig {
    /// Number of sample points on the x grid.
    pub num_x: usize,
    /// Lower bound of the x grid (inclusive).
    pub x_min: f64,
    /// Upper bound of the x grid (inclusive).
    pub x_max: f64,
    /// Position of the first Gaussian center.
    pub gauss_start: f64,
    /// Spacing between consecutive centers.
    pub gauss_spacing: f64,
    /// Number of Gaussians to sum. Zero is allowed and yields a flat zero curve.
    pub num_gauss: usize,
    /// Per-Gaussian amplitude before scaling.
    pub amplitude: f64,
    /// Width coefficient relative to the spacing.
    pub c_coeff: f64,
    /// Scaler applied to each Gaussian's contribution.
    pub amp_scaler: f64,
}

impl SumConfig {
    /// Gaussian width (standard deviation). Not validated: a zero or negative
    /// coefficient produces `inf`/`nan` samples that propagate into the plot.
    pub fn width(&self) -> f64 {
        self.gauss_spacing * self.c_coeff
    }
}

impl Default for SumConfig {
    fn default() -> Self {
        Self {
            num_x: DEFAULT_NUM_X,
            x_min: DEFAULT_X_RANGE.0,
            x_max: DEFAULT_X_RANGE.1,
            gauss_start: DEFAULT_GAUSS_START,
            gauss_spacing: DEFAULT_GAUSS_SPACING,
            num_gauss: DEFAULT_NUM_GAUSS,
            amplitude: DEFAULT_AMPLITUDE,
            c_coeff: DEFAULT_C_COEFF,
            amp_scaler: DEFAULT_AMP_SCALER,
        }
    }
}

/// A computed sum-of-Gaussians curve.
///
/// Invariant: `x.len() == amplitude.len()` always (the accumulator is created
/// zero-filled at the grid's length and only mutated element-wise).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SumCurve {
    /// Sample grid (immutable once generated).
    pub x: Vec<f64>,
    /// Accumulated amplitude at each grid point.
    pub amplitude: Vec<f64>,
    /// Centers that were summed (immutable once generated).
    pub centers: Vec<f64>,
}

impl SumCurve {
    /// Iterate the curve as `(x, amplitude)` pairs for plotting.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.amplitude.iter().copied())
    }
}

/// On-disk curve file: the run parameters plus the sampled grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveFile {
    /// Producing tool, for provenance ("gauss").
    pub tool: String,
    pub config: SumConfig,
    pub grid: CurveGrid,
}

/// Sampled grid stored inside a curve file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveGrid {
    pub x: Vec<f64>,
    pub amplitude: Vec<f64>,
}
