//! Export curve samples to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::SumCurve;
use crate::error::AppError;

/// Write the sampled curve to a CSV file.
pub fn write_samples_csv(path: &Path, curve: &SumCurve) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to create export CSV '{}': {e}", path.display()),
        )
    })?;

    writeln!(file, "x,amplitude")
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;

    for (x, y) in curve.points() {
        writeln!(file, "{x:.10},{y:.10}")
            .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}
