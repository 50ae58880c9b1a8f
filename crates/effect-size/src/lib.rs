//! Standardized effect size over N-dimensional samples
//!
//! This crate computes Cohen's d, and its bias-corrected form Hedges' g, for
//! arbitrarily shaped numeric arrays. The statistic is reduced along one axis
//! (or over the flattened inputs), with configurable variance estimation and
//! missing-value handling.
//!
//! # Supported modes
//!
//! - **One-sample**: mean over standard deviation, compared against zero
//! - **Independent, pooled**: difference in means over the pooled standard deviation
//! - **Independent, unpooled**: difference in means over the first sample's standard deviation
//! - **Paired**: one-sample statistic of the elementwise differences
//!
//! Any of these can be scaled by the small-sample correction
//! `1 - 3/(4·df - 1)`.
//!
//! # Missing values
//!
//! [`NanPolicy::Propagate`] lets NaN flow into the affected slices,
//! [`NanPolicy::Raise`] rejects samples containing NaN, and [`NanPolicy::Omit`]
//! skips NaN entries and uses the remaining per-slice counts as degrees of
//! freedom. Paired samples drop a pair if either member is missing.
//!
//! # Examples
//!
//! ## Two independent samples
//!
//! ```rust
//! use effect_size::{effect_size, EffectSizeOptions, Sample};
//!
//! let x = Sample::from(vec![0.0, 1.0, 2.0]);
//! let y = Sample::from(vec![1.0, 2.0, 3.0]);
//!
//! let d = effect_size(&x, Some(&y), &EffectSizeOptions::default()).unwrap();
//! assert_eq!(d.as_scalar(), Some(-1.0));
//! ```
//!
//! ## Batched along an axis
//!
//! ```rust
//! use effect_size::{cohen_d, EffectSizeEstimator, EffectSizeOptions, NanPolicy, Sample};
//! use ndarray::arr2;
//!
//! let x = Sample::from(arr2(&[[1.0, 2.0], [3.0, f64::NAN], [5.0, 7.0], [6.0, 8.0]]));
//! let y = Sample::from(arr2(&[[2.0, 3.0], [4.0, 5.0], [6.0, 6.0], [9.0, 9.0]]));
//!
//! let options = EffectSizeOptions::default().with_nan_policy(NanPolicy::Omit);
//! let d = cohen_d().with_options(options).compute(&x, Some(&y)).unwrap();
//!
//! assert_eq!(d.shape(), vec![2]);
//! ```
//!
//! ## Hedges' g
//!
//! ```rust
//! use effect_size::{hedges_g, EffectSizeEstimator, Sample};
//!
//! let x = Sample::from(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
//! let y = Sample::from(vec![3.0, 4.0, 5.0, 6.0, 7.0]);
//!
//! let g = hedges_g().compute(&x, Some(&y)).unwrap();
//! println!("Hedges' g: {g}");
//! ```

mod cohen_d;
mod hedges_g;
mod options;
mod traits;
mod types;

// Re-exports
pub use cohen_d::CohenD;
pub use effect_core::{Error, ErrorKind, Result, Sample, SampleId};
pub use hedges_g::{correction_factor, HedgesG};
pub use options::{Alternative, EffectSizeOptions, NanPolicy, PairingMode, VarianceMode};
pub use traits::EffectSizeEstimator;
pub use types::{EffectSizeInterpretation, EffectSizeOutput};

/// Compute the standardized effect size of `x` against `y` (or zero)
///
/// This is the functional entry point; it is equivalent to
/// `CohenD::from_options(options.clone()).compute(x, y)`.
pub fn effect_size(
    x: &Sample,
    y: Option<&Sample>,
    options: &EffectSizeOptions,
) -> Result<EffectSizeOutput> {
    CohenD::from_options(options.clone()).compute(x, y)
}

// Convenience constructors
pub fn cohen_d() -> CohenD {
    CohenD::new()
}

pub fn cohen_d_unpooled() -> CohenD {
    CohenD::new().unpooled()
}

pub fn cohen_d_paired() -> CohenD {
    CohenD::new().paired()
}

pub fn hedges_g() -> HedgesG {
    HedgesG::new()
}
