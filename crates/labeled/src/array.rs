//! Labeled n-dimensional arrays.

use indexmap::IndexMap;
use ndarray::ArrayD;
use serde::Serialize;

use crate::coordinate::{Attrs, Coordinate};
use crate::error::LabeledError;

/// An n-dimensional `f64` array whose dimensions carry names and coordinates.
///
/// Dimension labels may repeat. A coordinate along a repeated label must
/// match the size of every dimension carrying that label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledArray {
    name: Option<String>,
    dims: Vec<String>,
    data: ArrayD<f64>,
    coords: IndexMap<String, Coordinate>,
    attrs: Attrs,
}

impl LabeledArray {
    /// Creates a labeled array.
    ///
    /// # Errors
    ///
    /// Returns [`LabeledError::RankMismatch`] if `dims.len()` differs from the
    /// data rank, [`LabeledError::UnknownDimension`] if a coordinate runs
    /// along a label not in `dims`, and [`LabeledError::CoordinateLength`] if
    /// a coordinate length differs from its dimension size.
    pub fn new(
        data: ArrayD<f64>,
        dims: Vec<String>,
        coords: IndexMap<String, Coordinate>,
    ) -> Result<Self, LabeledError> {
        if dims.len() != data.ndim() {
            return Err(LabeledError::RankMismatch {
                dims: dims.len(),
                ndim: data.ndim(),
            });
        }

        for (name, coord) in &coords {
            let mut found = false;
            for (label, &size) in dims.iter().zip(data.shape()) {
                if label != coord.dim() {
                    continue;
                }
                found = true;
                if coord.len() != size {
                    return Err(LabeledError::CoordinateLength {
                        name: name.clone(),
                        expected: size,
                        got: coord.len(),
                    });
                }
            }
            if !found {
                return Err(LabeledError::UnknownDimension {
                    name: name.clone(),
                    dim: coord.dim().to_string(),
                });
            }
        }

        Ok(Self {
            name: None,
            dims,
            data,
            coords,
            attrs: Attrs::new(),
        })
    }

    /// Sets the variable name, builder style.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub(crate) fn set_name(&mut self, name: &str) {
        self.name = Some(name.to_string());
    }

    /// Variable name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Dimension labels in data order.
    pub fn dims(&self) -> &[String] {
        &self.dims
    }

    /// Data shape.
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Size of each distinct dimension label, in first-seen order.
    pub fn sizes(&self) -> IndexMap<String, usize> {
        let mut sizes = IndexMap::new();
        for (label, &size) in self.dims.iter().zip(self.data.shape()) {
            sizes.entry(label.clone()).or_insert(size);
        }
        sizes
    }

    /// The data.
    pub fn data(&self) -> &ArrayD<f64> {
        &self.data
    }

    /// Consumes the array and returns the data.
    pub fn into_data(self) -> ArrayD<f64> {
        self.data
    }

    /// Looks up a coordinate by name.
    pub fn coord(&self, name: &str) -> Option<&Coordinate> {
        self.coords.get(name)
    }

    /// Mutable coordinate lookup, for attaching attributes.
    pub fn coord_mut(&mut self, name: &str) -> Option<&mut Coordinate> {
        self.coords.get_mut(name)
    }

    /// All coordinates in insertion order.
    pub fn coords(&self) -> &IndexMap<String, Coordinate> {
        &self.coords
    }

    /// Array attributes.
    pub fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    /// Mutable array attributes.
    pub fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::IxDyn;

    fn coords(entries: Vec<(&str, Coordinate)>) -> IndexMap<String, Coordinate> {
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    #[test]
    fn valid_construction() {
        let data = ArrayD::zeros(IxDyn(&[2, 3]));
        let arr = LabeledArray::new(
            data,
            vec!["lev".into(), "lat".into()],
            coords(vec![
                ("lev", Coordinate::new("lev", vec![750.0, 250.0])),
                ("lat", Coordinate::new("lat", vec![-60.0, 0.0, 60.0])),
            ]),
        )
        .unwrap()
        .with_name("Tatm");

        assert_eq!(arr.name(), Some("Tatm"));
        assert_eq!(arr.dims(), &["lev".to_string(), "lat".to_string()]);
        assert_eq!(arr.shape(), &[2, 3]);
        assert_eq!(arr.sizes().get("lat"), Some(&3));
        assert_eq!(arr.coord("lev").unwrap().len(), 2);
        assert!(arr.coord("lon").is_none());
    }

    #[test]
    fn rank_mismatch() {
        let err = LabeledArray::new(
            ArrayD::zeros(IxDyn(&[2, 3])),
            vec!["lev".into()],
            IndexMap::new(),
        )
        .unwrap_err();
        assert_eq!(err, LabeledError::RankMismatch { dims: 1, ndim: 2 });
    }

    #[test]
    fn coordinate_length_mismatch() {
        let err = LabeledArray::new(
            ArrayD::zeros(IxDyn(&[2])),
            vec!["lev".into()],
            coords(vec![("lev", Coordinate::new("lev", vec![1.0, 2.0, 3.0]))]),
        )
        .unwrap_err();
        assert_eq!(
            err,
            LabeledError::CoordinateLength {
                name: "lev".to_string(),
                expected: 2,
                got: 3
            }
        );
    }

    #[test]
    fn coordinate_on_unknown_dimension() {
        let err = LabeledArray::new(
            ArrayD::zeros(IxDyn(&[2])),
            vec!["lev".into()],
            coords(vec![("lat", Coordinate::new("lat", vec![1.0, 2.0]))]),
        )
        .unwrap_err();
        assert!(matches!(err, LabeledError::UnknownDimension { .. }));
    }

    #[test]
    fn repeated_labels_of_equal_size() {
        let arr = LabeledArray::new(
            ArrayD::zeros(IxDyn(&[2, 2])),
            vec!["abstract".into(), "abstract".into()],
            coords(vec![("abstract", Coordinate::new("abstract", vec![0.0, 1.0]))]),
        )
        .unwrap();
        assert_eq!(arr.sizes().len(), 1);
    }

    #[test]
    fn repeated_labels_of_different_size() {
        let err = LabeledArray::new(
            ArrayD::zeros(IxDyn(&[2, 3])),
            vec!["abstract".into(), "abstract".into()],
            coords(vec![(
                "abstract",
                Coordinate::new("abstract", vec![0.0, 1.0, 2.0]),
            )]),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            LabeledError::CoordinateLength {
                expected: 2,
                got: 3,
                ..
            }
        ));
    }

    #[test]
    fn coord_mut_sets_attributes() {
        let mut arr = LabeledArray::new(
            ArrayD::zeros(IxDyn(&[1])),
            vec!["depth".into()],
            coords(vec![("depth", Coordinate::new("depth", vec![5.0]))]),
        )
        .unwrap();
        arr.coord_mut("depth")
            .unwrap()
            .attrs_mut()
            .insert("units".into(), "meters".into());
        assert_eq!(arr.coord("depth").unwrap().units(), Some("meters"));
    }
}
