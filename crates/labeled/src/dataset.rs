//! Collections of labeled arrays sharing dimensions and coordinates.

use indexmap::IndexMap;
use serde::Serialize;

use crate::array::LabeledArray;
use crate::coordinate::{Attrs, Coordinate};
use crate::error::LabeledError;

/// Named data variables plus a shared coordinate set.
///
/// Every dimension has a single size across all variables and coordinates.
/// Inserting a variable or coordinate under an existing name replaces it;
/// coordinates carried by an inserted variable overwrite shared coordinates
/// of the same name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    data_vars: IndexMap<String, LabeledArray>,
    coords: IndexMap<String, Coordinate>,
    attrs: Attrs,
}

impl Dataset {
    /// Creates an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a data variable under `name`, renaming it to match.
    ///
    /// # Errors
    ///
    /// Returns [`LabeledError::DimensionConflict`] if the array disagrees with
    /// an existing dimension size.
    pub fn insert_var(&mut self, name: &str, mut array: LabeledArray) -> Result<(), LabeledError> {
        let replaced: Vec<&str> = array.coords().keys().map(String::as_str).collect();
        self.check_sizes(&array.sizes(), Some(name), &replaced)?;

        for (coord_name, coord) in array.coords() {
            self.coords.insert(coord_name.clone(), coord.clone());
        }
        array.set_name(name);
        self.data_vars.insert(name.to_string(), array);
        Ok(())
    }

    /// Inserts or overwrites a shared coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`LabeledError::DimensionConflict`] if the coordinate length
    /// disagrees with the size of its dimension elsewhere in the dataset.
    pub fn set_coord(&mut self, name: &str, coord: Coordinate) -> Result<(), LabeledError> {
        let sizes = IndexMap::from([(coord.dim().to_string(), coord.len())]);
        self.check_sizes(&sizes, None, &[name])?;
        self.coords.insert(name.to_string(), coord);
        Ok(())
    }

    /// Looks up a data variable.
    pub fn get(&self, name: &str) -> Option<&LabeledArray> {
        self.data_vars.get(name)
    }

    /// Whether a data variable named `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.data_vars.contains_key(name)
    }

    /// Data variables in insertion order.
    pub fn data_vars(&self) -> &IndexMap<String, LabeledArray> {
        &self.data_vars
    }

    /// Looks up a shared coordinate.
    pub fn coord(&self, name: &str) -> Option<&Coordinate> {
        self.coords.get(name)
    }

    /// Mutable shared coordinate lookup, for attaching attributes.
    pub fn coord_mut(&mut self, name: &str) -> Option<&mut Coordinate> {
        self.coords.get_mut(name)
    }

    /// Shared coordinates in insertion order.
    pub fn coords(&self) -> &IndexMap<String, Coordinate> {
        &self.coords
    }

    /// Dataset attributes.
    pub fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    /// Mutable dataset attributes.
    pub fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }

    /// Number of data variables.
    pub fn len(&self) -> usize {
        self.data_vars.len()
    }

    /// Whether the dataset has no data variables.
    pub fn is_empty(&self) -> bool {
        self.data_vars.is_empty()
    }

    /// Size of every dimension used by a variable or coordinate.
    pub fn dims(&self) -> IndexMap<String, usize> {
        self.collect_sizes(None, &[])
    }

    fn collect_sizes(&self, skip_var: Option<&str>, skip_coords: &[&str]) -> IndexMap<String, usize> {
        let mut sizes = IndexMap::new();
        for (name, var) in &self.data_vars {
            if Some(name.as_str()) == skip_var {
                continue;
            }
            for (dim, size) in var.sizes() {
                sizes.entry(dim).or_insert(size);
            }
        }
        for (name, coord) in &self.coords {
            if skip_coords.contains(&name.as_str()) {
                continue;
            }
            sizes
                .entry(coord.dim().to_string())
                .or_insert(coord.len());
        }
        sizes
    }

    fn check_sizes(
        &self,
        incoming: &IndexMap<String, usize>,
        skip_var: Option<&str>,
        skip_coords: &[&str],
    ) -> Result<(), LabeledError> {
        let existing = self.collect_sizes(skip_var, skip_coords);
        for (dim, &got) in incoming {
            if let Some(&size) = existing.get(dim) {
                if size != got {
                    return Err(LabeledError::DimensionConflict {
                        dim: dim.clone(),
                        existing: size,
                        got,
                    });
                }
            }
        }
        Ok(())
    }
}
