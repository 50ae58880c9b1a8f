//! Axis normalization and broadcast compatibility
//!
//! A reduction axis is given as a possibly negative index. Two samples reduced
//! along the same axis must agree on every other axis, where a length of one
//! stretches to match the other sample.

use crate::error::{Error, Result};
use ndarray::Axis;

/// Resolve a possibly negative axis index against `ndim` dimensions
pub fn normalize_axis(axis: isize, ndim: usize) -> Result<Axis> {
    let resolved = if axis < 0 { axis + ndim as isize } else { axis };
    if resolved < 0 || resolved >= ndim as isize {
        return Err(Error::AxisOutOfBounds { axis, ndim });
    }
    Ok(Axis(resolved as usize))
}

/// Shape of the reduced result of two samples
///
/// Both shapes must have the same rank. `axis` is dropped from both and the
/// remaining dimensions are broadcast together.
pub fn broadcast_reduced_shape(x: &[usize], y: &[usize], axis: Axis) -> Result<Vec<usize>> {
    if x.len() != y.len() {
        return Err(Error::shape_mismatch("dimensionality", x, y));
    }

    remove_axis(x, axis)
        .into_iter()
        .zip(remove_axis(y, axis))
        .map(|(a, b)| match (a, b) {
            _ if a == b => Ok(a),
            (1, other) | (other, 1) => Ok(other),
            _ => Err(Error::shape_mismatch("broadcast", x, y)),
        })
        .collect()
}

/// `shape` with `axis` removed
pub fn remove_axis(shape: &[usize], axis: Axis) -> Vec<usize> {
    shape
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != axis.index())
        .map(|(_, &len)| len)
        .collect()
}
