//! NaN-aware location and dispersion reductions
//!
//! Mean, variance and the count of contributing observations are produced by
//! one primitive, [`Reduction::moments`]. The strategy decides which elements
//! contribute: [`Reduction::Propagate`] keeps every element (so a single NaN
//! poisons the slice), [`Reduction::SkipNan`] drops NaN entries and reports the
//! reduced count so callers can derive per-slice degrees of freedom.

use ndarray::{ArrayD, ArrayViewD, Axis, Zip};

/// Location and dispersion summary of one reduced slice
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments {
    /// Number of observations that contributed
    pub count: usize,
    /// Arithmetic mean, NaN when `count == 0`
    pub mean: f64,
    /// Variance with divisor `count - ddof`, NaN when `count <= ddof`
    pub variance: f64,
}

impl Moments {
    /// Standard deviation
    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }

    /// Degrees of freedom of the sample variance (`count - 1`)
    pub fn degrees_of_freedom(&self) -> f64 {
        self.count as f64 - 1.0
    }
}

/// Element-selection strategy for a reduction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    /// Every element contributes
    Propagate,
    /// NaN elements are skipped
    SkipNan,
}

impl Reduction {
    #[inline]
    fn keeps(&self, value: f64) -> bool {
        match self {
            Self::Propagate => true,
            Self::SkipNan => !value.is_nan(),
        }
    }

    /// Summarize a sequence of values
    ///
    /// Uses a two-pass algorithm with a compensation term. A slice whose
    /// contributing values are all identical has a variance of exactly zero.
    pub fn moments<'a, I>(&self, values: I, ddof: usize) -> Moments
    where
        I: IntoIterator<Item = &'a f64>,
        I::IntoIter: Clone,
    {
        let values = values.into_iter();
        let kept = values.filter(|&&v| self.keeps(v));

        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in kept.clone() {
            count += 1;
            sum += v;
            min = min.min(v);
            max = max.max(v);
        }

        if count == 0 {
            return Moments {
                count,
                mean: f64::NAN,
                variance: f64::NAN,
            };
        }

        let mut mean = sum / count as f64;
        let variance = if count <= ddof || !mean.is_finite() {
            f64::NAN
        } else if min == max {
            mean = min;
            0.0
        } else {
            let (sum_sq, compensation) = kept.fold((0.0, 0.0), |(sq, comp), &v| {
                let d = v - mean;
                (sq + d * d, comp + d)
            });
            let sum_sq = sum_sq - compensation * compensation / count as f64;
            sum_sq.max(0.0) / (count - ddof) as f64
        };

        Moments {
            count,
            mean,
            variance,
        }
    }

    /// Summarize every lane along `axis`
    ///
    /// The result has the input shape with `axis` removed.
    pub fn moments_along(&self, data: ArrayViewD<'_, f64>, axis: Axis, ddof: usize) -> ArrayD<Moments> {
        let lanes = Zip::from(data.lanes(axis));
        #[cfg(feature = "parallel")]
        {
            lanes.par_map_collect(|lane| self.moments(lane, ddof))
        }
        #[cfg(not(feature = "parallel"))]
        {
            lanes.map_collect(|lane| self.moments(lane, ddof))
        }
    }

    /// Summarize all elements as a single flattened slice
    pub fn moments_flat(&self, data: ArrayViewD<'_, f64>, ddof: usize) -> Moments {
        self.moments(data.iter(), ddof)
    }
}
