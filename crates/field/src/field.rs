//! Fields: numeric arrays tied to a domain.

use std::sync::Arc;

use ndarray::{ArrayD, IxDyn};

use crate::domain::Domain;
use crate::error::FieldError;

/// A multi-dimensional `f64` array stored in the domain's storage order.
///
/// Each axis is either cell-centered (length equal to the number of axis
/// points) or interface-valued (length equal to the number of bounds). The
/// per-axis choice is recorded in the interfaces flag, indexed by storage
/// position.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    data: ArrayD<f64>,
    domain: Arc<Domain>,
    interfaces: Vec<bool>,
}

impl Field {
    /// Creates a field, inferring the interfaces flag from the data shape.
    ///
    /// An axis whose length equals its number of bounds is interface-valued;
    /// one whose length equals its number of points is cell-centered. For a
    /// single-point axis with two bounds the lengths are 1 and 2, so the two
    /// cases never coincide.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::RankMismatch`] if the data rank differs from the
    /// grid, or [`FieldError::ShapeMismatch`] if an axis length fits neither
    /// the points nor the bounds.
    pub fn new(data: ArrayD<f64>, domain: Arc<Domain>) -> Result<Self, FieldError> {
        check_rank(&data, &domain)?;

        let mut interfaces = vec![false; data.ndim()];
        for name in domain.grid().axes() {
            let (pos, axis) = locate(&domain, name)?;
            let got = data.shape()[pos];
            interfaces[pos] = if got == axis.len() {
                false
            } else if got == axis.bounds().len() {
                true
            } else {
                return Err(FieldError::ShapeMismatch {
                    axis: name.clone(),
                    got,
                    points: axis.len(),
                    bounds: axis.bounds().len(),
                });
            };
        }

        Ok(Self {
            data,
            domain,
            interfaces,
        })
    }

    /// Creates a field with an explicit interfaces flag (storage order).
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InterfacesLength`] if the flag count differs
    /// from the grid rank, and the same shape errors as [`Field::new`] when a
    /// flagged length does not match the data.
    pub fn with_interfaces(
        data: ArrayD<f64>,
        domain: Arc<Domain>,
        interfaces: Vec<bool>,
    ) -> Result<Self, FieldError> {
        check_rank(&data, &domain)?;
        if interfaces.len() != domain.grid().ndim() {
            return Err(FieldError::InterfacesLength {
                expected: domain.grid().ndim(),
                got: interfaces.len(),
            });
        }

        for name in domain.grid().axes() {
            let (pos, axis) = locate(&domain, name)?;
            let got = data.shape()[pos];
            let expected = if interfaces[pos] {
                axis.bounds().len()
            } else {
                axis.len()
            };
            if got != expected {
                return Err(FieldError::ShapeMismatch {
                    axis: name.clone(),
                    got,
                    points: axis.len(),
                    bounds: axis.bounds().len(),
                });
            }
        }

        Ok(Self {
            data,
            domain,
            interfaces,
        })
    }

    /// Same domain, new data given in grid order.
    ///
    /// The data is moved back into storage order, so the output of a labeled
    /// conversion can be wrapped again. Interfaces are inferred from the shape.
    ///
    /// # Errors
    ///
    /// See [`Field::new`].
    pub fn with_data(&self, data: ArrayD<f64>) -> Result<Self, FieldError> {
        let grid = self.domain.grid();
        if data.ndim() != grid.ndim() {
            return Err(FieldError::RankMismatch {
                expected: grid.ndim(),
                got: data.ndim(),
            });
        }
        let stored = data
            .permuted_axes(IxDyn(&grid.inverse_permutation()))
            .as_standard_layout()
            .into_owned();
        Self::new(stored, Arc::clone(&self.domain))
    }

    /// Underlying data in storage order.
    pub fn data(&self) -> &ArrayD<f64> {
        &self.data
    }

    /// The domain this field lives on.
    pub fn domain(&self) -> &Arc<Domain> {
        &self.domain
    }

    /// Interfaces flag indexed by storage position.
    pub fn interfaces(&self) -> &[bool] {
        &self.interfaces
    }

    /// Whether the field is defined at cell boundaries along `axis`.
    ///
    /// Returns `None` when `axis` is not on the domain grid.
    pub fn is_interface(&self, axis: &str) -> Option<bool> {
        self.domain
            .axis_index(axis)
            .and_then(|pos| self.interfaces.get(pos).copied())
    }

    /// Data shape in storage order.
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }
}

fn check_rank(data: &ArrayD<f64>, domain: &Domain) -> Result<(), FieldError> {
    if data.ndim() != domain.grid().ndim() {
        return Err(FieldError::RankMismatch {
            expected: domain.grid().ndim(),
            got: data.ndim(),
        });
    }
    Ok(())
}

fn locate<'a>(domain: &'a Domain, name: &str) -> Result<(usize, &'a crate::Axis), FieldError> {
    let pos = domain
        .axis_index(name)
        .ok_or_else(|| FieldError::MissingPosition {
            name: name.to_string(),
        })?;
    let axis = domain
        .axis(name)
        .ok_or_else(|| FieldError::UnregisteredAxis {
            name: name.to_string(),
        })?;
    Ok((pos, axis))
}
