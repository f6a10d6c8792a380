//! One-dimensional coordinate variables.

use std::collections::BTreeMap;

use ndarray::Array1;
use serde::Serialize;

/// Free-form string attributes (`units`, `long_name`, ...).
pub type Attrs = BTreeMap<String, String>;

/// Coordinate values along a single named dimension, plus attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coordinate {
    dim: String,
    values: Array1<f64>,
    attrs: Attrs,
}

impl Coordinate {
    /// Creates a coordinate along `dim` with no attributes.
    pub fn new(dim: impl Into<String>, values: impl Into<Array1<f64>>) -> Self {
        Self {
            dim: dim.into(),
            values: values.into(),
            attrs: Attrs::new(),
        }
    }

    /// Sets one attribute, builder style.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Dimension this coordinate runs along.
    pub fn dim(&self) -> &str {
        &self.dim
    }

    /// Coordinate values.
    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the coordinate has no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Attributes.
    pub fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    /// Mutable attributes.
    pub fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }

    /// Shorthand for the `units` attribute.
    pub fn units(&self) -> Option<&str> {
        self.attrs.get("units").map(String::as_str)
    }
}
