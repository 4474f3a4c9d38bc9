//! The Gaussian evaluator.
//!
//! The curve of interest is the unnormalized form
//!
//! `g(x) = a * exp(-(x - ctr)^2 / (2 * c^2))`
//!
//! so `a` is the peak value at `x = ctr` and `c` is the standard-deviation-like
//! width parameter.
//!
//! Numerical notes:
//! - `c = 0` is intentionally not guarded. The division produces `inf`/`nan`
//!   per IEEE 754 and those values propagate silently to the plot; there is no
//!   error path here.
//! - Both functions are pure: same inputs, same outputs, no hidden state.

/// Evaluate one Gaussian at a single position.
pub fn gauss(ctr: f64, a: f64, c: f64, x: f64) -> f64 {
    let d = x - ctr;
    a * (-(d * d) / (2.0 * c * c)).exp()
}

/// Evaluate one Gaussian over a slice of positions.
pub fn gauss_over(ctr: f64, a: f64, c: f64, xs: &[f64]) -> Vec<f64> {
    xs.iter().map(|&x| gauss(ctr, a, c, x)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peak_value_at_center() {
        assert_eq!(gauss(3.0, 1.0, 0.25, 3.0), 1.0);
        assert_eq!(gauss(3.0, 2.5, 0.25, 3.0), 2.5);
    }

    #[test]
    fn three_sigma_value() {
        // g(ctr + 3c) = a * exp(-9/2)
        let c = 0.24;
        let v = gauss(2.0, 1.0, c, 2.0 + 3.0 * c);
        assert!((v - (-4.5_f64).exp()).abs() < 1e-12, "got {v}");
        // exp(-4.5) ≈ 0.01111
        assert!((v - 0.01111).abs() < 1e-5);
    }

    #[test]
    fn symmetric_about_center() {
        for &dx in &[0.1, 0.5, 1.0, 3.0] {
            let l = gauss(5.0, 1.0, 0.3, 5.0 - dx);
            let r = gauss(5.0, 1.0, 0.3, 5.0 + dx);
            // 5.0 ± dx round differently, so allow for one ulp of slack.
            assert!((l - r).abs() < 1e-12, "asymmetry at dx={dx}: {l} vs {r}");
        }
    }

    #[test]
    fn evaluator_is_pure() {
        let xs: Vec<f64> = (0..100).map(|i| i as f64 * 0.1).collect();
        let a = gauss_over(4.0, 1.0, 0.24, &xs);
        let b = gauss_over(4.0, 1.0, 0.24, &xs);
        assert_eq!(a, b);
        assert_eq!(a.len(), xs.len());
    }

    #[test]
    fn zero_width_propagates_non_finite() {
        // 0/0 at the center, x/0 elsewhere; no panic, no error.
        assert!(gauss(1.0, 1.0, 0.0, 1.0).is_nan());
        assert_eq!(gauss(1.0, 1.0, 0.0, 2.0), 0.0); // exp(-inf)
    }
}
