//! Core traits for effect size estimation

use crate::{EffectSizeOptions, EffectSizeOutput, VarianceMode};
use effect_core::{Result, Sample};

/// Estimator of a standardized effect size over N-dimensional samples
///
/// Implementations are stateless: every call reads only its inputs and the
/// estimator's options, so a single estimator can be shared across threads.
pub trait EffectSizeEstimator {
    /// Options the estimator computes with
    fn options(&self) -> &EffectSizeOptions;

    /// Compute the statistic of `x` against `y`, or against zero if `y` is `None`
    fn compute(&self, x: &Sample, y: Option<&Sample>) -> Result<EffectSizeOutput>;

    /// Check if the estimator is antisymmetric (effect_size(A,B) = -effect_size(B,A))
    ///
    /// The unpooled statistic standardizes by the first sample only, so
    /// swapping the samples changes its denominator.
    fn is_symmetric(&self) -> bool {
        self.options().variance == VarianceMode::Pooled || self.options().is_paired()
    }
}
