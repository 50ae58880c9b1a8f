//! Configuration for effect size computation
//!
//! Enumerated options parse from their textual names (`"pooled"`, `"omit"`,
//! `"two-sided"`, ...) and reject anything else with a configuration error
//! that names the allowed set. [`EffectSizeOptions`] can be built fluently or
//! deserialized from JSON.

use effect_core::{Error, Reduction, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! textual_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $option:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Textual names accepted by `FromStr`
            pub const ALLOWED: &'static str = concat!($( "'", $text, "' " ),+);

            /// Textual name of this value
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $text ),+
                }
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $( $text => Ok(Self::$variant), )+
                    other => Err(Error::invalid_choice($option, other, Self::ALLOWED.trim_end())),
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = Error;

            fn try_from(s: String) -> Result<Self> {
                s.parse()
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

textual_enum! {
    /// How the denominator of a two-sample statistic is estimated
    VarianceMode, "variance mode" {
        /// Both variances weighted by their degrees of freedom
        #[default]
        Pooled => "pooled",
        /// Only the first sample's standard deviation
        Unpooled => "unpooled",
    }
}

textual_enum! {
    /// Whether two samples are matched observations
    PairingMode, "pairing mode" {
        #[default]
        Independent => "independent",
        /// Reduce the elementwise difference `x - y`
        Paired => "paired",
    }
}

textual_enum! {
    /// Missing-value handling applied before reduction
    NanPolicy, "nan_policy" {
        /// NaN flows into the affected slices
        #[default]
        Propagate => "propagate",
        /// NaN anywhere in a sample is an error
        Raise => "raise",
        /// NaN entries are skipped and excluded from the counts
        Omit => "omit",
    }
}

textual_enum! {
    /// Direction of the alternative hypothesis
    ///
    /// Accepted and validated for interface compatibility. It has no effect on
    /// the magnitude or sign of the computed statistic.
    Alternative, "alternative" {
        #[default]
        TwoSided => "two-sided",
        Less => "less",
        Greater => "greater",
    }
}

impl NanPolicy {
    /// Reduction strategy used once the policy has been applied
    pub fn reduction(&self) -> Reduction {
        match self {
            Self::Omit => Reduction::SkipNan,
            Self::Propagate | Self::Raise => Reduction::Propagate,
        }
    }
}

/// Options controlling an effect size computation
///
/// The defaults are: pooled variance, `ddof = 1`, NaN propagation, two-sided
/// alternative, reduction along axis 0, no kept dimensions, independent
/// samples and no bias correction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EffectSizeOptions {
    pub variance: VarianceMode,
    /// Delta degrees of freedom of the variance divisor `N - ddof`
    pub ddof: usize,
    pub nan_policy: NanPolicy,
    pub alternative: Alternative,
    /// Reduction axis, negative values count from the end; `None` flattens
    pub axis: Option<isize>,
    pub keepdims: bool,
    pub pairing: PairingMode,
    pub bias_correction: bool,
}

impl Default for EffectSizeOptions {
    fn default() -> Self {
        Self {
            variance: VarianceMode::Pooled,
            ddof: 1,
            nan_policy: NanPolicy::Propagate,
            alternative: Alternative::TwoSided,
            axis: Some(0),
            keepdims: false,
            pairing: PairingMode::Independent,
            bias_correction: false,
        }
    }
}

impl EffectSizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a JSON object; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_pooled(mut self, pooled: bool) -> Self {
        self.variance = if pooled {
            VarianceMode::Pooled
        } else {
            VarianceMode::Unpooled
        };
        self
    }

    pub fn with_ddof(mut self, ddof: usize) -> Self {
        self.ddof = ddof;
        self
    }

    pub fn with_nan_policy(mut self, nan_policy: NanPolicy) -> Self {
        self.nan_policy = nan_policy;
        self
    }

    pub fn with_alternative(mut self, alternative: Alternative) -> Self {
        self.alternative = alternative;
        self
    }

    /// Reduce along `axis`
    pub fn with_axis(mut self, axis: isize) -> Self {
        self.axis = Some(axis);
        self
    }

    /// Flatten both samples and reduce everything to one value
    pub fn flattened(mut self) -> Self {
        self.axis = None;
        self
    }

    pub fn with_keepdims(mut self, keepdims: bool) -> Self {
        self.keepdims = keepdims;
        self
    }

    pub fn with_paired(mut self, paired: bool) -> Self {
        self.pairing = if paired {
            PairingMode::Paired
        } else {
            PairingMode::Independent
        };
        self
    }

    pub fn with_bias_correction(mut self, bias_correction: bool) -> Self {
        self.bias_correction = bias_correction;
        self
    }

    pub fn is_paired(&self) -> bool {
        self.pairing == PairingMode::Paired
    }
}
