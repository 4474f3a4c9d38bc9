//! Reporting utilities: summary stats and formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the math/summation code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::domain::{SumConfig, SumCurve};

/// Summary statistics of a computed curve.
///
/// `plateau` covers the span between the first and last center, which is the
/// region the amplitude scaler is tuned against; it is `None` when fewer than
/// two Gaussians were summed.
#[derive(Debug, Clone)]
pub struct SumSummary {
    pub peak: f64,
    pub peak_x: f64,
    pub plateau: Option<PlateauStats>,
}

/// Min/max amplitude over the inter-center plateau.
#[derive(Debug, Clone)]
pub struct PlateauStats {
    pub min: f64,
    pub max: f64,
}

impl PlateauStats {
    pub fn ripple(&self) -> f64 {
        self.max - self.min
    }
}

/// Compute summary stats for a curve.
///
/// Non-finite samples (possible with a degenerate width) are skipped rather
/// than poisoning the extrema; if every sample is non-finite the peak is
/// reported as `NaN`.
pub fn summarize(curve: &SumCurve) -> SumSummary {
    let mut peak = f64::NAN;
    let mut peak_x = f64::NAN;
    for (x, v) in curve.points() {
        if v.is_finite() && !(v <= peak) {
            peak = v;
            peak_x = x;
        }
    }

    let plateau = match (curve.centers.first(), curve.centers.last()) {
        (Some(&first), Some(&last)) if last > first => {
            let mut min = f64::INFINITY;
            let mut max = f64::NEG_INFINITY;
            for (x, v) in curve.points() {
                if x >= first && x <= last && v.is_finite() {
                    min = min.min(v);
                    max = max.max(v);
                }
            }
            if min.is_finite() && max.is_finite() {
                Some(PlateauStats { min, max })
            } else {
                None
            }
        }
        _ => None,
    };

    SumSummary { peak, peak_x, plateau }
}

/// Format the full run summary (parameter echo + curve stats).
pub fn format_run_summary(config: &SumConfig, curve: &SumCurve, summary: &SumSummary) -> String {
    let mut out = String::new();

    out.push_str("=== gauss - Sum of Uniformly Spaced Gaussians ===\n");
    out.push_str(&format!(
        "Grid: n={} | x=[{:.3}, {:.3}]\n",
        config.num_x, config.x_min, config.x_max
    ));
    out.push_str(&format!(
        "Gaussians: n={} | start={:.3} | spacing={:.3} | width={:.4} (c_coeff={:.3})\n",
        config.num_gauss,
        config.gauss_start,
        config.gauss_spacing,
        config.width(),
        config.c_coeff
    ));
    out.push_str(&format!(
        "Amplitude: a={:.3} | amp_scaler={:.4}\n",
        config.amplitude, config.amp_scaler
    ));

    out.push_str("\nCurve:\n");
    out.push_str(&format!(
        "- peak: {:.4} at x={:.4}\n",
        summary.peak, summary.peak_x
    ));
    match &summary.plateau {
        Some(p) => {
            out.push_str(&format!(
                "- plateau (between outer centers): [{:.4}, {:.4}] | ripple={:.4}\n",
                p.min,
                p.max,
                p.ripple()
            ));
        }
        None => {
            out.push_str("- plateau: n/a (fewer than two centers)\n");
        }
    }
    if curve.amplitude.iter().any(|v| !v.is_finite()) {
        out.push_str("- warning: curve contains non-finite samples (check width/c_coeff)\n");
    }
    out.push('\n');

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sum::sum_gaussians;

    #[test]
    fn summary_peak_on_default_run() {
        let config = SumConfig::default();
        let curve = sum_gaussians(&config).unwrap();
        let summary = summarize(&curve);

        // Peak sits inside the span of the centers, slightly above 1.0.
        assert!(summary.peak > 0.9 && summary.peak < 1.2, "peak={}", summary.peak);
        assert!(summary.peak_x >= config.gauss_start);
        assert!(summary.peak_x <= config.gauss_start + config.gauss_spacing * 7.0);

        let plateau = summary.plateau.expect("plateau for 8 centers");
        assert!(plateau.min <= plateau.max);
        assert!(plateau.ripple() < 0.25, "ripple={}", plateau.ripple());
    }

    #[test]
    fn summary_degenerate_zero_centers() {
        let config = SumConfig {
            num_gauss: 0,
            ..SumConfig::default()
        };
        let curve = sum_gaussians(&config).unwrap();
        let summary = summarize(&curve);
        assert!(summary.plateau.is_none());
        assert_eq!(summary.peak, 0.0);
    }

    #[test]
    fn format_mentions_non_finite_samples() {
        // A 13-point grid over [0, 12] steps by exactly 1.0 and lands on the
        // center at x = 2.0, where a zero width divides 0 by 0.
        let config = SumConfig {
            c_coeff: 0.0,
            num_x: 13,
            ..SumConfig::default()
        };
        let curve = sum_gaussians(&config).unwrap();
        let summary = summarize(&curve);
        let text = format_run_summary(&config, &curve, &summary);
        assert!(text.contains("non-finite"));
    }
}
