//! Types for effect size results

use ndarray::{arr0, ArrayD};
use std::fmt;

/// Result of an effect size computation
///
/// A fully reduced computation without kept dimensions is a scalar. Anything
/// else is an array whose shape is the input shape with the reduced axis
/// removed, or set to one when dimensions are kept.
#[derive(Debug, Clone, PartialEq)]
pub enum EffectSizeOutput {
    Scalar(f64),
    Array(ArrayD<f64>),
}

impl EffectSizeOutput {
    /// Shape of the result; a scalar has an empty shape
    pub fn shape(&self) -> Vec<usize> {
        match self {
            Self::Scalar(_) => Vec::new(),
            Self::Array(values) => values.shape().to_vec(),
        }
    }

    /// The value if this is a scalar
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(value) => Some(*value),
            Self::Array(_) => None,
        }
    }

    /// The array if this is an array
    pub fn as_array(&self) -> Option<&ArrayD<f64>> {
        match self {
            Self::Scalar(_) => None,
            Self::Array(values) => Some(values),
        }
    }

    /// Convert to an array; a scalar becomes a zero-dimensional array
    pub fn into_array(self) -> ArrayD<f64> {
        match self {
            Self::Scalar(value) => arr0(value).into_dyn(),
            Self::Array(values) => values,
        }
    }

    /// Apply `f` to every value, keeping the shape
    pub fn map(self, mut f: impl FnMut(f64) -> f64) -> Self {
        match self {
            Self::Scalar(value) => Self::Scalar(f(value)),
            Self::Array(values) => Self::Array(values.mapv(f)),
        }
    }

    /// Interpretation of a scalar result; `None` for arrays and NaN
    pub fn interpretation(&self) -> Option<EffectSizeInterpretation> {
        self.as_scalar()
            .and_then(EffectSizeInterpretation::from_magnitude)
    }
}

impl fmt::Display for EffectSizeOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(value) => write!(f, "{value:.3}"),
            Self::Array(values) => write!(f, "{values:.3}"),
        }
    }
}

/// Interpretation of a standardized mean difference following Cohen's conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectSizeInterpretation {
    /// |d| < 0.2
    Negligible,
    /// 0.2 <= |d| < 0.5
    Small,
    /// 0.5 <= |d| < 0.8
    Medium,
    /// |d| >= 0.8
    Large,
}

impl EffectSizeInterpretation {
    /// Classify a magnitude; NaN has no interpretation
    pub fn from_magnitude(magnitude: f64) -> Option<Self> {
        if magnitude.is_nan() {
            return None;
        }
        let abs_magnitude = magnitude.abs();
        Some(if abs_magnitude < 0.2 {
            Self::Negligible
        } else if abs_magnitude < 0.5 {
            Self::Small
        } else if abs_magnitude < 0.8 {
            Self::Medium
        } else {
            Self::Large
        })
    }
}

impl fmt::Display for EffectSizeInterpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Negligible => "negligible",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr1;

    #[test]
    fn test_effect_size_interpretation() {
        assert_eq!(
            EffectSizeInterpretation::from_magnitude(0.1),
            Some(EffectSizeInterpretation::Negligible)
        );
        assert_eq!(
            EffectSizeInterpretation::from_magnitude(-0.3),
            Some(EffectSizeInterpretation::Small)
        );
        assert_eq!(
            EffectSizeInterpretation::from_magnitude(0.6),
            Some(EffectSizeInterpretation::Medium)
        );
        assert_eq!(
            EffectSizeInterpretation::from_magnitude(-1.0),
            Some(EffectSizeInterpretation::Large)
        );
        assert_eq!(EffectSizeInterpretation::from_magnitude(f64::NAN), None);
        assert_eq!(
            EffectSizeInterpretation::from_magnitude(f64::INFINITY),
            Some(EffectSizeInterpretation::Large)
        );
    }

    #[test]
    fn test_output_accessors() {
        let scalar = EffectSizeOutput::Scalar(-1.0);
        assert_eq!(scalar.shape(), Vec::<usize>::new());
        assert_eq!(scalar.as_scalar(), Some(-1.0));
        assert!(scalar.as_array().is_none());
        assert_eq!(scalar.interpretation(), Some(EffectSizeInterpretation::Large));
        assert_eq!(scalar.clone().into_array().ndim(), 0);

        let array = EffectSizeOutput::Array(arr1(&[0.1, 0.9]).into_dyn());
        assert_eq!(array.shape(), vec![2]);
        assert_eq!(array.as_scalar(), None);
        assert_eq!(array.interpretation(), None);

        let doubled = array.map(|v| v * 2.0);
        assert_eq!(doubled.as_array().map(|a| a[[1]]), Some(1.8));
    }

    #[test]
    fn test_display() {
        assert_eq!(EffectSizeOutput::Scalar(-1.26491).to_string(), "-1.265");
        assert_eq!(EffectSizeInterpretation::Medium.to_string(), "medium");
    }
}
