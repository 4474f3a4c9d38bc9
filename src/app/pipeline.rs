//! Shared summation pipeline used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! grid -> centers -> accumulate -> summarize
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).

use crate::domain::{SumConfig, SumCurve};
use crate::error::AppError;
use crate::report::{summarize, SumSummary};
use crate::sum::sum_gaussians;

/// All computed outputs of a single `gauss sum` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub curve: SumCurve,
    pub summary: SumSummary,
}

/// Execute the summation pipeline and return the computed outputs.
pub fn run_sum(config: &SumConfig) -> Result<RunOutput, AppError> {
    let curve = sum_gaussians(config)?;
    let summary = summarize(&curve);
    Ok(RunOutput { curve, summary })
}
