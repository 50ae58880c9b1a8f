//! Core types for standardized effect size computation
//!
//! This crate provides the building blocks shared by the effect size engine:
//!
//! - [`Sample`]: uniform N-dimensional `f64` container with coercion from
//!   integer arrays and JSON
//! - [`Reduction`]: one NaN-aware primitive producing mean, variance and the
//!   count of contributing observations for every reduced slice
//! - [`axis`]: axis normalization and broadcast compatibility of two samples
//! - [`Error`]: the error taxonomy shared by all effect-stats crates
//!
//! # Example
//!
//! ```rust
//! use effect_core::{Reduction, Sample};
//! use ndarray::Axis;
//!
//! let sample = Sample::from_shape_vec(&[2, 3], vec![1.0, 2.0, 3.0, 3.0, 6.0, f64::NAN]).unwrap();
//! let per_column = Reduction::SkipNan.moments_along(sample.view(), Axis(0), 1);
//!
//! assert_eq!(per_column.shape(), &[3]);
//! assert_eq!(per_column[[2]].count, 1);
//! ```

pub mod axis;
pub mod error;
pub mod reduction;
pub mod sample;

pub use axis::{broadcast_reduced_shape, normalize_axis, remove_axis};
pub use error::{Error, ErrorKind, Result, SampleId};
pub use reduction::{Moments, Reduction};
pub use sample::Sample;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
