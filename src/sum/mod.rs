//! The summation driver.
//!
//! Given a `SumConfig` this module:
//!
//! 1. generates the sample grid (`num_x` points over `[x_min, x_max]`)
//! 2. generates the evenly spaced Gaussian centers
//! 3. zero-initializes the accumulator at the grid's length
//! 4. for each center, evaluates the Gaussian (amplitude `amplitude`, width
//!    `spacing * c_coeff`), scales by `amp_scaler`, and adds element-wise
//!
//! The accumulator's length equals the grid's length throughout; the only
//! mutation is the element-wise add. All inputs that can be rejected are
//! rejected up front by the grid generators; the Gaussian math itself never
//! fails (a degenerate width yields `inf`/`nan` samples by design).

use crate::domain::{SumConfig, SumCurve};
use crate::error::AppError;
use crate::math::{gauss, gaussian_centers, linspace};

/// Compute the sum-of-Gaussians curve for `config`.
pub fn sum_gaussians(config: &SumConfig) -> Result<SumCurve, AppError> {
    let x = linspace(config.x_min, config.x_max, config.num_x)?;
    let centers = gaussian_centers(config.gauss_start, config.gauss_spacing, config.num_gauss)?;

    let width = config.width();
    let mut amplitude = vec![0.0_f64; x.len()];

    for &ctr in &centers {
        for (acc, &xi) in amplitude.iter_mut().zip(x.iter()) {
            *acc += gauss(ctr, config.amplitude, width, xi) * config.amp_scaler;
        }
    }

    Ok(SumCurve {
        x,
        amplitude,
        centers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> SumConfig {
        SumConfig::default()
    }

    #[test]
    fn accumulator_matches_grid_length() {
        let curve = sum_gaussians(&base_config()).unwrap();
        assert_eq!(curve.x.len(), curve.amplitude.len());
        assert_eq!(curve.x.len(), base_config().num_x);
        assert_eq!(curve.centers.len(), base_config().num_gauss);
    }

    #[test]
    fn zero_gaussians_yields_all_zeros() {
        let config = SumConfig {
            num_gauss: 0,
            ..base_config()
        };
        let curve = sum_gaussians(&config).unwrap();
        assert!(curve.centers.is_empty());
        assert!(curve.amplitude.iter().all(|&v| v == 0.0));
        assert_eq!(curve.amplitude.len(), config.num_x);
    }

    #[test]
    fn single_gaussian_peaks_at_its_center() {
        // Put the single center on a grid point: 1001 points over [0, 10]
        // step by 0.01, hitting both x = 2.0 and x = 2.0 + 3c = 2.72.
        let config = SumConfig {
            num_x: 1001,
            x_min: 0.0,
            x_max: 10.0,
            gauss_start: 2.0,
            num_gauss: 1,
            amplitude: 1.0,
            amp_scaler: 1.0,
            ..base_config()
        };
        let curve = sum_gaussians(&config).unwrap();
        let i = curve
            .x
            .iter()
            .position(|&x| (x - 2.0).abs() < 1e-9)
            .expect("grid point at 2.0");
        assert!((curve.amplitude[i] - 1.0).abs() < 1e-12);

        // Value at ctr + 3c is exp(-4.5).
        let c = config.width();
        let x3 = 2.0 + 3.0 * c;
        let j = curve
            .x
            .iter()
            .position(|&x| (x - x3).abs() < 1e-9)
            .expect("grid point at ctr + 3c");
        assert!((curve.amplitude[j] - (-4.5_f64).exp()).abs() < 1e-6);
    }

    #[test]
    fn amp_scaler_scales_linearly() {
        let config = base_config();
        let base = sum_gaussians(&config).unwrap();

        let k = 3.0;
        let scaled = sum_gaussians(&SumConfig {
            amp_scaler: config.amp_scaler * k,
            ..config
        })
        .unwrap();

        for (b, s) in base.amplitude.iter().zip(scaled.amplitude.iter()) {
            // Each contribution is scaled before accumulation, so the sum
            // scales exactly up to one rounding step per term.
            assert!((s - b * k).abs() <= 1e-12 * b.abs().max(1.0), "{b} vs {s}");
        }
    }

    #[test]
    fn default_run_is_roughly_flat_between_outer_centers() {
        // The default amp_scaler was tuned so the plateau between the centers
        // sits near 1.0. The outermost inter-center gaps roll off (they only
        // have neighbors on one side), so check one spacing in from each end.
        let config = base_config();
        let curve = sum_gaussians(&config).unwrap();
        let first = curve.centers[0] + config.gauss_spacing;
        let last = *curve.centers.last().unwrap() - config.gauss_spacing;
        for (x, v) in curve.points() {
            if x >= first && x <= last {
                assert!(
                    (0.9..=1.1).contains(&v),
                    "plateau value {v} at x={x} outside expected band"
                );
            }
        }
    }
}
