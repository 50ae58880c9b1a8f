//! # effect-stats
//!
//! Standardized effect sizes over N-dimensional arrays.
//!
//! This crate re-exports the workspace crates under one roof:
//!
//! - [`core`]: samples, NaN-aware reductions, axis handling and errors
//! - [`effect`]: Cohen's d and Hedges' g estimators with their options
//!
//! ## Quick Start
//!
//! ```rust
//! use effect_stats::prelude::*;
//!
//! let x = Sample::from(vec![8.0, 9.0, 10.0, 11.0, 12.0]);
//! let y = Sample::from(vec![10.0, 11.0, 12.0, 13.0, 14.0]);
//!
//! let d = effect_size(&x, Some(&y), &EffectSizeOptions::default()).unwrap();
//! assert_eq!(d.interpretation(), Some(EffectSizeInterpretation::Large));
//! ```

pub use effect_core as core;
pub use effect_size as effect;

pub mod prelude {
    pub use effect_core::{Error, ErrorKind, Result, Sample};
    pub use effect_size::{
        cohen_d, cohen_d_paired, cohen_d_unpooled, effect_size, hedges_g, Alternative, CohenD,
        EffectSizeEstimator, EffectSizeInterpretation, EffectSizeOptions, EffectSizeOutput,
        HedgesG, NanPolicy, PairingMode, VarianceMode,
    };
}
