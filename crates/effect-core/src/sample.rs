//! Uniform numeric container for effect size inputs
//!
//! Every input is coerced into a [`Sample`], an N-dimensional array of `f64`.
//! Integer and other primitive element types are accepted and converted to
//! reals; anything that cannot be read as a number is a `TypeKind` error.

use crate::error::{Error, Result};
use ndarray::{Array, Array1, ArrayBase, ArrayD, ArrayViewD, Data, Dimension, IxDyn};
use num_traits::ToPrimitive;
use serde_json::Value;

/// An N-dimensional array of real numbers
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    data: ArrayD<f64>,
}

impl Sample {
    /// Wrap an existing array
    pub fn new(data: ArrayD<f64>) -> Self {
        Self { data }
    }

    /// One-dimensional sample from a vector of values
    pub fn from_vec(values: Vec<f64>) -> Self {
        Self {
            data: Array1::from_vec(values).into_dyn(),
        }
    }

    /// Sample of the given shape from row-major values
    pub fn from_shape_vec(shape: &[usize], values: Vec<f64>) -> Result<Self> {
        let len = values.len();
        let data = ArrayD::from_shape_vec(IxDyn(shape), values)
            .map_err(|_| Error::shape_mismatch("shape construction", shape, &[len]))?;
        Ok(Self { data })
    }

    /// Coerce an array of any primitive numeric element type
    ///
    /// Integers are accepted and treated as reals. Elements without an `f64`
    /// representation are reported with their row-major index.
    pub fn from_array<A, S, D>(array: &ArrayBase<S, D>) -> Result<Self>
    where
        A: ToPrimitive + std::fmt::Debug,
        S: Data<Elem = A>,
        D: Dimension,
    {
        let values = array
            .iter()
            .enumerate()
            .map(|(index, value)| {
                value.to_f64().ok_or_else(|| Error::NonNumeric {
                    index,
                    found: format!("{value:?}"),
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        Self::from_shape_vec(array.shape(), values)
    }

    /// Coerce a (possibly nested) JSON array of numbers
    ///
    /// `null` entries are read as missing values (NaN). Strings, booleans and
    /// objects are rejected. Nested arrays must be rectangular.
    pub fn from_json(value: &Value) -> Result<Self> {
        let shape = json_shape(value);
        let mut values = Vec::with_capacity(shape.iter().product());
        flatten_json(value, 0, &shape, &mut values)?;
        Self::from_shape_vec(&shape, values)
    }

    /// Parse a JSON document and coerce it with [`Sample::from_json`]
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json).map_err(Error::MalformedSample)?;
        Self::from_json(&value)
    }

    /// Borrow the underlying array
    pub fn view(&self) -> ArrayViewD<'_, f64> {
        self.data.view()
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    pub fn ndim(&self) -> usize {
        self.data.ndim()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether any element is NaN
    pub fn has_nan(&self) -> bool {
        self.data.iter().any(|v| v.is_nan())
    }

    /// Apply a function to every element, keeping the shape
    pub fn mapv(&self, f: impl FnMut(f64) -> f64) -> Self {
        Self {
            data: self.data.mapv(f),
        }
    }

    pub fn into_inner(self) -> ArrayD<f64> {
        self.data
    }
}

impl<D: Dimension> From<Array<f64, D>> for Sample {
    fn from(array: Array<f64, D>) -> Self {
        Self::new(array.into_dyn())
    }
}

impl From<Vec<f64>> for Sample {
    fn from(values: Vec<f64>) -> Self {
        Self::from_vec(values)
    }
}

impl From<&[f64]> for Sample {
    fn from(values: &[f64]) -> Self {
        Self::from_vec(values.to_vec())
    }
}

/// Shape implied by following the first element at every nesting level
fn json_shape(value: &Value) -> Vec<usize> {
    let mut shape = Vec::new();
    let mut cursor = value;
    while let Value::Array(items) = cursor {
        shape.push(items.len());
        match items.first() {
            Some(first) => cursor = first,
            None => break,
        }
    }
    shape
}

fn flatten_json(value: &Value, depth: usize, shape: &[usize], out: &mut Vec<f64>) -> Result<()> {
    match value {
        Value::Array(items) => {
            if depth >= shape.len() || items.len() != shape[depth] {
                return Err(Error::Ragged(format!(
                    "unexpected array of length {} at depth {depth} (expected shape {shape:?})",
                    items.len()
                )));
            }
            for item in items {
                flatten_json(item, depth + 1, shape, out)?;
            }
            Ok(())
        }
        leaf => {
            if depth != shape.len() {
                return Err(Error::Ragged(format!(
                    "scalar at depth {depth} (expected shape {shape:?})"
                )));
            }
            let number = match leaf {
                Value::Number(n) => n.as_f64().ok_or_else(|| Error::NonNumeric {
                    index: out.len(),
                    found: n.to_string(),
                })?,
                Value::Null => f64::NAN,
                other => {
                    return Err(Error::NonNumeric {
                        index: out.len(),
                        found: other.to_string(),
                    })
                }
            };
            out.push(number);
            Ok(())
        }
    }
}
