//! Read/write curve JSON files.
//!
//! Curve JSON is the "portable" representation of a computed curve:
//! - the full run configuration (so a run can be reproduced)
//! - the sampled grid for quick re-plotting without recomputation
//!
//! The schema is defined by `domain::CurveFile`.

use std::fs::File;
use std::path::Path;

use crate::domain::{CurveFile, CurveGrid, SumConfig, SumCurve};
use crate::error::AppError;

/// Write a curve JSON file.
pub fn write_curve_json(path: &Path, curve: &SumCurve, config: &SumConfig) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to create curve JSON '{}': {e}", path.display()),
        )
    })?;

    let out = CurveFile {
        tool: "gauss".to_string(),
        config: config.clone(),
        grid: CurveGrid {
            x: curve.x.clone(),
            amplitude: curve.amplitude.clone(),
        },
    };

    serde_json::to_writer_pretty(file, &out)
        .map_err(|e| AppError::new(2, format!("Failed to write curve JSON: {e}")))?;

    Ok(())
}

/// Read a curve JSON file.
pub fn read_curve_json(path: &Path) -> Result<CurveFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to open curve JSON '{}': {e}", path.display()),
        )
    })?;
    let curve: CurveFile = serde_json::from_reader(file)
        .map_err(|e| AppError::new(2, format!("Invalid curve JSON: {e}")))?;

    if curve.grid.x.len() != curve.grid.amplitude.len() {
        return Err(AppError::new(
            2,
            format!(
                "Corrupt curve JSON: {} x values vs {} amplitude values.",
                curve.grid.x.len(),
                curve.grid.amplitude.len()
            ),
        ));
    }
    Ok(curve)
}
