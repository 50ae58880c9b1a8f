//! Common test utilities for effect-size tests

#![allow(dead_code)]

use effect_size::{EffectSizeEstimator, EffectSizeOutput, Sample};
use ndarray::{ArrayD, IxDyn};
use rand::prelude::*;
use rand_distr::Normal;

/// Route `tracing` output to the test harness; safe to call repeatedly
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// One-dimensional sample from a slice
pub fn sample(values: &[f64]) -> Sample {
    Sample::from(values)
}

/// Normally distributed sample of the given shape
pub fn normal_sample(shape: &[usize], mean: f64, std: f64, seed: u64) -> Sample {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(mean, std).unwrap();
    let len = shape.iter().product();
    let values = (0..len).map(|_| normal.sample(&mut rng)).collect();
    Sample::new(ArrayD::from_shape_vec(IxDyn(shape), values).unwrap())
}

/// Scalar result of an estimator, panicking on errors and array outputs
pub fn scalar<E: EffectSizeEstimator>(estimator: &E, x: &[f64], y: Option<&[f64]>) -> f64 {
    let y = y.map(sample);
    estimator
        .compute(&sample(x), y.as_ref())
        .unwrap()
        .as_scalar()
        .unwrap()
}

/// Array result of a computation, panicking on scalars
pub fn array(output: EffectSizeOutput) -> ArrayD<f64> {
    match output {
        EffectSizeOutput::Array(values) => values,
        EffectSizeOutput::Scalar(value) => panic!("expected an array, got scalar {value}"),
    }
}

/// Equality within `tol` relative to max(1, |a|), treating NaN as equal to NaN
pub fn close(a: f64, b: f64, tol: f64) -> bool {
    if a.is_nan() || b.is_nan() {
        return a.is_nan() && b.is_nan();
    }
    (a - b).abs() <= tol * a.abs().max(1.0)
}
