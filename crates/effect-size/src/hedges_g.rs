//! Hedges' g effect size
//!
//! Hedges' g is a bias-corrected version of Cohen's d that provides a less biased
//! estimate of effect size, especially for small samples. It applies a correction
//! factor to account for the upward bias in Cohen's d.

use crate::{CohenD, EffectSizeEstimator, EffectSizeOptions, EffectSizeOutput};
use effect_core::{Result, Sample};

/// Small-sample correction factor J = 1 - 3/(4·df - 1)
///
/// `df` is the total degrees of freedom of the variance estimate. With
/// `df <= 1` the correction is undefined and NaN is returned.
pub fn correction_factor(df: f64) -> f64 {
    if df.is_nan() || df <= 1.0 {
        return f64::NAN;
    }
    1.0 - 3.0 / (4.0 * df - 1.0)
}

/// Hedges' g effect size estimator
///
/// Hedges' g is calculated as:
/// g = d × J
///
/// where d is Cohen's d and J is [`correction_factor`] evaluated at
/// `n₁ + n₂ - 2` for independent samples or `n - 1` for one-sample and paired
/// computations. For large samples g ≈ d, for small samples |g| < |d|.
#[derive(Debug, Clone, PartialEq)]
pub struct HedgesG {
    /// Underlying Cohen's d estimator, always with bias correction enabled
    cohen_d: CohenD,
}

impl HedgesG {
    /// Create a new Hedges' g estimator
    pub fn new() -> Self {
        Self::from_options(EffectSizeOptions::default())
    }

    /// Hedges' g using the given options; bias correction is forced on
    pub fn from_options(options: EffectSizeOptions) -> Self {
        Self {
            cohen_d: CohenD::from_options(options.with_bias_correction(true)),
        }
    }

    /// The uncorrected estimator with otherwise identical options
    pub fn uncorrected(&self) -> CohenD {
        CohenD::from_options(self.cohen_d.options().clone().with_bias_correction(false))
    }
}

impl Default for HedgesG {
    fn default() -> Self {
        Self::new()
    }
}

impl EffectSizeEstimator for HedgesG {
    fn options(&self) -> &EffectSizeOptions {
        self.cohen_d.options()
    }

    fn compute(&self, x: &Sample, y: Option<&Sample>) -> Result<EffectSizeOutput> {
        self.cohen_d.compute(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sample(values: &[f64]) -> Sample {
        Sample::from(values)
    }

    #[test]
    fn test_correction_factor() {
        let j_small = correction_factor(8.0);
        assert_abs_diff_eq!(j_small, 1.0 - 3.0 / 31.0, epsilon = 1e-15);
        assert!(j_small < 1.0);
        assert!(j_small > 0.9);

        let j_large = correction_factor(98.0);
        assert!(j_large > 0.99);
        assert!(j_large < 1.0);
    }

    #[test]
    fn test_correction_factor_undefined() {
        assert!(correction_factor(1.0).is_nan());
        assert!(correction_factor(0.0).is_nan());
        assert!(correction_factor(-1.0).is_nan());
        assert!(correction_factor(f64::NAN).is_nan());
    }

    #[test]
    fn test_hedges_g_vs_cohen_d() {
        let group1 = sample(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let group2 = sample(&[3.0, 4.0, 5.0, 6.0, 7.0]);

        let hedges_g = HedgesG::new();
        let g = hedges_g.compute(&group1, Some(&group2)).unwrap().as_scalar().unwrap();
        let d = hedges_g
            .uncorrected()
            .compute(&group1, Some(&group2))
            .unwrap()
            .as_scalar()
            .unwrap();

        assert!(g.abs() < d.abs());
        assert_eq!(g.signum(), d.signum());
        assert_abs_diff_eq!(g, d * correction_factor(8.0), epsilon = 1e-12);
    }

    #[test]
    fn test_large_sample_convergence() {
        let group1 = Sample::from_vec((0..100).map(|i| i as f64).collect());
        let group2 = Sample::from_vec((0..100).map(|i| (i + 5) as f64).collect());

        let hedges_g = HedgesG::new();
        let g = hedges_g.compute(&group1, Some(&group2)).unwrap().as_scalar().unwrap();
        let d = hedges_g
            .uncorrected()
            .compute(&group1, Some(&group2))
            .unwrap()
            .as_scalar()
            .unwrap();

        assert_abs_diff_eq!(g, d, epsilon = 0.01);
    }

    #[test]
    fn test_one_sample_degrees_of_freedom() {
        let x = sample(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let hedges_g = HedgesG::new();
        let g = hedges_g.compute(&x, None).unwrap().as_scalar().unwrap();
        let d = hedges_g.uncorrected().compute(&x, None).unwrap().as_scalar().unwrap();
        assert_abs_diff_eq!(g, d * correction_factor(4.0), epsilon = 1e-12);
    }

    #[test]
    fn test_tiny_samples_are_nan() {
        // two independent pairs: df = 2
        let hedges_g = HedgesG::new();
        let g = hedges_g
            .compute(&sample(&[1.0, 2.0]), Some(&sample(&[3.0, 5.0])))
            .unwrap()
            .as_scalar()
            .unwrap();
        assert!(g.is_finite());

        // one pair: df = 1
        let g = hedges_g.compute(&sample(&[1.0, 3.0]), None).unwrap().as_scalar().unwrap();
        assert!(g.is_nan());
    }

    #[test]
    fn test_options_force_correction() {
        let options = EffectSizeOptions::default().with_bias_correction(false);
        let hedges_g = HedgesG::from_options(options);
        assert!(hedges_g.options().bias_correction);
        assert!(!hedges_g.uncorrected().options().bias_correction);
    }
}
