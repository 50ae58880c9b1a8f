//! Error types for effect size computation
//!
//! Provides a unified error type for all effect-stats crates. Every variant
//! maps onto one of four [`ErrorKind`]s so callers can branch on configuration
//! problems, shape problems, data problems and type problems without matching
//! on individual variants.

use std::fmt;
use thiserror::Error;

/// Which sample of a two-sample computation an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleId {
    /// The first sample, `x`
    First,
    /// The second sample, `y`
    Second,
}

impl SampleId {
    /// Conventional short name of the sample
    pub fn name(&self) -> &'static str {
        match self {
            Self::First => "x",
            Self::Second => "y",
        }
    }
}

impl fmt::Display for SampleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Coarse error taxonomy exposed to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid option value or option combination
    Configuration,
    /// Sample shapes are incompatible for the requested mode
    ShapeMismatch,
    /// Sample contents rejected by the missing-value policy
    Data,
    /// Sample elements are not numeric
    TypeKind,
}

/// Core error type for effect size operations
#[derive(Error, Debug)]
pub enum Error {
    /// An enumerated option received a value outside its allowed set
    #[error("Invalid {option}: {value:?} (expected one of {allowed})")]
    InvalidChoice {
        option: &'static str,
        value: String,
        allowed: &'static str,
    },

    /// Reduction axis does not exist in the input
    #[error("Invalid axis: axis {axis} is out of bounds for array of dimension {ndim}")]
    AxisOutOfBounds { axis: isize, ndim: usize },

    /// Paired mode was requested without a second sample
    #[error("Invalid configuration: paired mode requires two samples")]
    PairedWithoutSecondSample,

    /// Any other invalid option combination or value
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Sample shapes are incompatible
    #[error("Shape mismatch in {context}: {left:?} vs {right:?}")]
    ShapeMismatch {
        context: &'static str,
        left: Vec<usize>,
        right: Vec<usize>,
    },

    /// Nested input is not rectangular
    #[error("Ragged input: {0}")]
    Ragged(String),

    /// A sample contains NaN under the `raise` policy
    #[error("Input {sample} contains NaN values")]
    NanInSample { sample: SampleId },

    /// A sample element could not be interpreted as a real number
    #[error("Non-numeric element at index {index}: {found}")]
    NonNumeric { index: usize, found: String },

    /// A sample document is not valid JSON
    #[error("Malformed sample: {0}")]
    MalformedSample(#[source] serde_json::Error),

    /// JSON decoding error while loading options
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Coarse kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidChoice { .. }
            | Self::AxisOutOfBounds { .. }
            | Self::PairedWithoutSecondSample
            | Self::Configuration(_)
            | Self::Json(_) => ErrorKind::Configuration,
            Self::ShapeMismatch { .. } | Self::Ragged(_) => ErrorKind::ShapeMismatch,
            Self::NanInSample { .. } => ErrorKind::Data,
            Self::NonNumeric { .. } | Self::MalformedSample(_) => ErrorKind::TypeKind,
        }
    }

    /// Create an error for an enumerated option value outside its set
    pub fn invalid_choice(option: &'static str, value: &str, allowed: &'static str) -> Self {
        Self::InvalidChoice {
            option,
            value: value.to_string(),
            allowed,
        }
    }

    /// Create an error naming two incompatible shapes
    pub fn shape_mismatch(context: &'static str, left: &[usize], right: &[usize]) -> Self {
        Self::ShapeMismatch {
            context,
            left: left.to_vec(),
            right: right.to_vec(),
        }
    }

    /// Create an error for NaN found under the `raise` policy
    pub fn nan_in_sample(sample: SampleId) -> Self {
        Self::NanInSample { sample }
    }
}
