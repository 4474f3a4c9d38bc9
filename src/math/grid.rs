//! Sample-grid and center-sequence generation.
//!
//! Both generators are deterministic given the same inputs, and both include
//! their endpoints: `linspace` pins its first/last points to the requested
//! bounds exactly rather than accumulating `min + i*step` rounding error into
//! the final point.

use crate::error::AppError;

/// Generate `steps` evenly spaced points between `min` and `max` (inclusive).
pub fn linspace(min: f64, max: f64, steps: usize) -> Result<Vec<f64>, AppError> {
    if !(min.is_finite() && max.is_finite() && max > min) {
        return Err(AppError::new(
            2,
            format!("Invalid x range: min={min}, max={max} (must be finite and max>min)."),
        ));
    }
    if steps < 2 {
        return Err(AppError::new(2, "Sample count must be >= 2."));
    }

    let step = (max - min) / (steps as f64 - 1.0);

    let mut out = Vec::with_capacity(steps);
    for i in 0..steps {
        out.push(min + step * i as f64);
    }
    // Pin the last point to the exact upper bound.
    out[steps - 1] = max;
    Ok(out)
}

/// Generate `count` Gaussian centers starting at `start`, spaced by `spacing`.
///
/// `count = 0` is a valid degenerate case (no Gaussians to sum) and returns an
/// empty sequence.
pub fn gaussian_centers(start: f64, spacing: f64, count: usize) -> Result<Vec<f64>, AppError> {
    if count == 0 {
        return Ok(Vec::new());
    }
    if !(start.is_finite() && spacing.is_finite()) {
        return Err(AppError::new(
            2,
            format!("Invalid center parameters: start={start}, spacing={spacing} (must be finite)."),
        ));
    }
    if count >= 2 && spacing <= 0.0 {
        return Err(AppError::new(
            2,
            format!("Center spacing must be > 0 for multiple Gaussians (got {spacing})."),
        ));
    }

    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        out.push(start + spacing * i as f64);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_includes_endpoints() {
        let v = linspace(0.0, 12.0, 10_000).unwrap();
        assert_eq!(v.len(), 10_000);
        assert_eq!(v[0], 0.0);
        assert_eq!(v[v.len() - 1], 12.0);
    }

    #[test]
    fn linspace_uniform_spacing() {
        let v = linspace(2.0, 4.0, 5).unwrap();
        for w in v.windows(2) {
            assert!((w[1] - w[0] - 0.5).abs() < 1e-12);
        }
    }

    #[test]
    fn linspace_rejects_bad_ranges() {
        assert!(linspace(1.0, 1.0, 10).is_err());
        assert!(linspace(2.0, 1.0, 10).is_err());
        assert!(linspace(f64::NAN, 1.0, 10).is_err());
        assert!(linspace(0.0, 1.0, 1).is_err());
    }

    #[test]
    fn centers_strictly_increasing_with_exact_spacing() {
        let c = gaussian_centers(2.0, 0.4, 8).unwrap();
        assert_eq!(c.len(), 8);
        assert_eq!(c[0], 2.0);
        for w in c.windows(2) {
            assert!(w[1] > w[0]);
            assert!((w[1] - w[0] - 0.4).abs() < 1e-12);
        }
        // Last center lands at start + spacing*(count-1).
        assert!((c[7] - 4.8).abs() < 1e-12);
    }

    #[test]
    fn centers_degenerate_counts() {
        assert!(gaussian_centers(2.0, 0.4, 0).unwrap().is_empty());
        assert_eq!(gaussian_centers(2.0, 0.4, 1).unwrap(), vec![2.0]);
        // A single center does not care about the spacing sign.
        assert_eq!(gaussian_centers(2.0, -1.0, 1).unwrap(), vec![2.0]);
        assert!(gaussian_centers(2.0, 0.0, 2).is_err());
    }
}
