//! Cohen's d over N-dimensional samples
//!
//! Cohen's d expresses a difference in means in units of standard deviation.
//! This implementation reduces along one axis of arbitrarily shaped inputs (or
//! over the flattened inputs), so a single call produces one statistic per
//! slice.
//!
//! Each call runs through the same stages:
//!
//! 1. validate the sample combination against the options
//! 2. apply the NaN policy (`raise` fails here, `omit` selects NaN-skipping reductions)
//! 3. resolve the axis and the broadcast shape of the result
//! 4. reduce each sample to per-slice [`Moments`] and combine them
//! 5. optionally apply the small-sample bias correction
//! 6. shape the output
//!
//! Degenerate slices (zero dispersion, fewer than two observations) yield NaN
//! rather than an error so batched computations keep their other slices.

use crate::hedges_g::correction_factor;
use crate::{EffectSizeEstimator, EffectSizeOptions, EffectSizeOutput, VarianceMode};
use effect_core::{
    broadcast_reduced_shape, normalize_axis, Error, Moments, Reduction, Result, Sample, SampleId,
};
use ndarray::{arr0, ArrayD, ArrayViewD, Axis, IxDyn, Zip};
use tracing::{debug, instrument};

/// Cohen's d effect size estimator
///
/// For two independent samples with pooled variance:
///
/// d = (x̄ - ȳ) / s_p,  s_p = √(((n_x - 1)·s_x² + (n_y - 1)·s_y²) / (n_x + n_y - 2))
///
/// With unpooled variance the denominator is s_x. For a single sample
/// d = x̄ / s_x, and paired samples use the single-sample form on `x - y`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CohenD {
    options: EffectSizeOptions,
}

impl CohenD {
    /// Create a new Cohen's d estimator with default options
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_options(options: EffectSizeOptions) -> Self {
        Self { options }
    }

    /// Standardize by the first sample's standard deviation only
    pub fn unpooled(mut self) -> Self {
        self.options = self.options.with_pooled(false);
        self
    }

    /// Treat the samples as matched pairs
    pub fn paired(mut self) -> Self {
        self.options = self.options.with_paired(true);
        self
    }

    /// Apply the small-sample bias correction (Hedges' g)
    pub fn with_bias_correction(mut self) -> Self {
        self.options = self.options.with_bias_correction(true);
        self
    }

    /// Replace the options wholesale
    pub fn with_options(mut self, options: EffectSizeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &EffectSizeOptions {
        &self.options
    }

    #[instrument(
        skip(self, x, y),
        fields(
            x_shape = ?x.shape(),
            y_shape = ?y.map(Sample::shape),
            axis = ?self.options.axis,
            paired = self.options.is_paired(),
        )
    )]
    fn compute_impl(&self, x: &Sample, y: Option<&Sample>) -> Result<EffectSizeOutput> {
        let options = &self.options;

        if options.is_paired() {
            let y = y.ok_or(Error::PairedWithoutSecondSample)?;
            if x.shape() != y.shape() {
                return Err(Error::shape_mismatch("paired samples", x.shape(), y.shape()));
            }
        }

        let reduction = apply_nan_policy(options, x, y)?;

        let axis = options
            .axis
            .map(|axis| normalize_axis(axis, x.ndim()))
            .transpose()?;

        let statistic = match y {
            None => {
                debug!("One-sample effect size against zero");
                self.one_sample(x.view(), axis, reduction)
            }
            Some(y) if options.is_paired() => {
                debug!("Paired effect size on elementwise differences");
                let differences = &x.view() - &y.view();
                self.one_sample(differences.view(), axis, reduction)
            }
            Some(y) => {
                debug!(variance = %options.variance, "Independent two-sample effect size");
                self.two_sample(x, y, axis, reduction)?
            }
        };

        let output = shape_output(statistic, axis, options.keepdims, x.ndim());
        debug!(output_shape = ?output.shape(), "Effect size computed");
        Ok(output)
    }

    fn one_sample(&self, data: ArrayViewD<'_, f64>, axis: Option<Axis>, reduction: Reduction) -> ArrayD<f64> {
        let ddof = self.options.ddof;
        match axis {
            Some(axis) => reduction
                .moments_along(data, axis, ddof)
                .mapv(|m| self.standardize_one(&m)),
            None => arr0(self.standardize_one(&reduction.moments_flat(data, ddof))).into_dyn(),
        }
    }

    fn two_sample(
        &self,
        x: &Sample,
        y: &Sample,
        axis: Option<Axis>,
        reduction: Reduction,
    ) -> Result<ArrayD<f64>> {
        let ddof = self.options.ddof;
        let Some(axis) = axis else {
            let mx = reduction.moments_flat(x.view(), ddof);
            let my = reduction.moments_flat(y.view(), ddof);
            return Ok(arr0(self.standardize_two(&mx, &my)).into_dyn());
        };

        let shape = broadcast_reduced_shape(x.shape(), y.shape(), axis)?;
        let mx = reduction.moments_along(x.view(), axis, ddof);
        let my = reduction.moments_along(y.view(), axis, ddof);
        let bx = mx
            .broadcast(IxDyn(&shape))
            .ok_or_else(|| Error::shape_mismatch("broadcast", x.shape(), y.shape()))?;
        let by = my
            .broadcast(IxDyn(&shape))
            .ok_or_else(|| Error::shape_mismatch("broadcast", x.shape(), y.shape()))?;

        Ok(Zip::from(&bx)
            .and(&by)
            .map_collect(|a, b| self.standardize_two(a, b)))
    }

    /// Mean over standard deviation for one slice
    fn standardize_one(&self, m: &Moments) -> f64 {
        if m.count < 2 {
            return f64::NAN;
        }
        let d = safe_ratio(m.mean, m.std_dev());
        self.correct(d, m.degrees_of_freedom())
    }

    /// Difference in means over the selected denominator for one slice pair
    ///
    /// Pooled mode needs two observations in each sample. Unpooled mode only
    /// needs them in `x`; an empty `y` still yields NaN through its mean.
    fn standardize_two(&self, x: &Moments, y: &Moments) -> f64 {
        let denominator = match self.options.variance {
            VarianceMode::Pooled if x.count < 2 || y.count < 2 => return f64::NAN,
            VarianceMode::Pooled => pooled_std(x, y),
            VarianceMode::Unpooled if x.count < 2 => return f64::NAN,
            VarianceMode::Unpooled => x.std_dev(),
        };
        let d = safe_ratio(x.mean - y.mean, denominator);
        self.correct(d, x.degrees_of_freedom() + y.degrees_of_freedom())
    }

    fn correct(&self, d: f64, df: f64) -> f64 {
        if self.options.bias_correction {
            d * correction_factor(df)
        } else {
            d
        }
    }
}

impl EffectSizeEstimator for CohenD {
    fn options(&self) -> &EffectSizeOptions {
        &self.options
    }

    fn compute(&self, x: &Sample, y: Option<&Sample>) -> Result<EffectSizeOutput> {
        self.compute_impl(x, y)
    }
}

/// Check the `raise` policy and pick the reduction strategy for the others
fn apply_nan_policy(options: &EffectSizeOptions, x: &Sample, y: Option<&Sample>) -> Result<Reduction> {
    if options.nan_policy == crate::NanPolicy::Raise {
        if x.has_nan() {
            return Err(Error::nan_in_sample(SampleId::First));
        }
        if y.is_some_and(Sample::has_nan) {
            return Err(Error::nan_in_sample(SampleId::Second));
        }
    }
    Ok(options.nan_policy.reduction())
}

/// √(((n_x - 1)·var_x + (n_y - 1)·var_y) / (n_x + n_y - 2))
fn pooled_std(x: &Moments, y: &Moments) -> f64 {
    let df_x = x.degrees_of_freedom();
    let df_y = y.degrees_of_freedom();
    let df = df_x + df_y;
    if df <= 0.0 {
        return f64::NAN;
    }
    ((df_x * x.variance + df_y * y.variance) / df).sqrt()
}

/// `numerator / denominator`, NaN when the denominator is zero or undefined
fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 || denominator.is_nan() {
        f64::NAN
    } else {
        numerator / denominator
    }
}

/// Drop or keep the reduced axis; a fully reduced result becomes a scalar
fn shape_output(
    statistic: ArrayD<f64>,
    axis: Option<Axis>,
    keepdims: bool,
    ndim: usize,
) -> EffectSizeOutput {
    match (axis, keepdims) {
        (None, true) => {
            let value = statistic.first().copied().unwrap_or(f64::NAN);
            EffectSizeOutput::Array(ArrayD::from_elem(IxDyn(&vec![1; ndim]), value))
        }
        (Some(axis), true) => EffectSizeOutput::Array(statistic.insert_axis(axis)),
        (_, false) if statistic.ndim() == 0 => {
            EffectSizeOutput::Scalar(statistic.first().copied().unwrap_or(f64::NAN))
        }
        (_, false) => EffectSizeOutput::Array(statistic),
    }
}
