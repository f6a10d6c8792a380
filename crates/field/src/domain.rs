//! Domains: a grid plus the coordinate axes it refers to.

use indexmap::IndexMap;

use crate::axis::Axis;
use crate::error::FieldError;
use crate::grid::Grid;

/// Spatial domain of a field.
///
/// Owns the [`Grid`] (canonical order and storage positions) and an ordered
/// registry of [`Axis`] objects keyed by axis name. Every grid axis is
/// registered; the registry may carry additional axes.
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    name: Option<String>,
    grid: Grid,
    axes: IndexMap<String, Axis>,
}

impl Domain {
    /// Creates a domain from a grid and its coordinate axes.
    ///
    /// Axes are registered in the order given.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::DuplicateAxis`] if two axes share a name and
    /// [`FieldError::UnregisteredAxis`] if a grid axis has no coordinate axis.
    pub fn new(grid: Grid, axes: Vec<Axis>) -> Result<Self, FieldError> {
        let mut registry = IndexMap::with_capacity(axes.len());
        for axis in axes {
            let name = axis.name().to_string();
            if registry.contains_key(&name) {
                return Err(FieldError::DuplicateAxis { name });
            }
            registry.insert(name, axis);
        }

        if let Some(missing) = grid.axes().iter().find(|n| !registry.contains_key(*n)) {
            return Err(FieldError::UnregisteredAxis {
                name: missing.clone(),
            });
        }

        Ok(Self {
            name: None,
            grid,
            axes: registry,
        })
    }

    /// Creates a domain whose storage order equals the order of `axes`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::DuplicateAxis`] if two axes share a name.
    pub fn from_axes(axes: Vec<Axis>) -> Result<Self, FieldError> {
        let grid = Grid::in_storage_order(axes.iter().map(|a| a.name().to_string()))?;
        Self::new(grid, axes)
    }

    /// Attaches a descriptive name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Descriptive name, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The domain grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Looks up a registered axis by name.
    pub fn axis(&self, name: &str) -> Option<&Axis> {
        self.axes.get(name)
    }

    /// Iterates over the full axis registry in registration order.
    pub fn axes(&self) -> impl Iterator<Item = (&str, &Axis)> {
        self.axes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Grid axes in canonical order, each with its storage position.
    pub fn grid_axes(&self) -> impl Iterator<Item = (usize, &Axis)> {
        self.grid
            .axes()
            .iter()
            .filter_map(|name| Some((self.axis_index(name)?, self.axis(name)?)))
    }

    /// Storage position of `name` in a field's array.
    pub fn axis_index(&self, name: &str) -> Option<usize> {
        self.grid.axis_index(name)
    }
}
