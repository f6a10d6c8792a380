//! Field adapter: one field to one labeled array.

use climxr_field::Field;
use climxr_labeled::LabeledArray;
use indexmap::IndexMap;
use ndarray::IxDyn;
use tracing::{debug, warn};

use crate::coords::axis_coordinate;
use crate::error::ConvertError;

/// Converts a field into a labeled array in its domain's canonical axis order.
///
/// For each grid axis the dimension label is the vocabulary name (`lev`,
/// `lat`, `lon`, `depth`) or `abstract` for anything else. Axes on which the
/// field is interface-valued get the label `<dim>_bounds` and the boundary
/// coordinate; all others get the plain label and the center coordinate.
/// Axis units, where present, are copied onto the coordinate.
///
/// Several non-vocabulary axes all map to `abstract`. The labels then
/// repeat, the last such axis supplies the coordinate, and a warning is
/// logged.
///
/// # Errors
///
/// Returns [`ConvertError::Labeled`] only when folded `abstract` axes have
/// different lengths.
#[tracing::instrument(skip_all, fields(shape = ?field.shape()))]
pub fn field_to_array(field: &Field) -> Result<LabeledArray, ConvertError> {
    let domain = field.domain();
    let ndim = domain.grid().ndim();

    let mut dims: Vec<String> = Vec::with_capacity(ndim);
    let mut coords = IndexMap::with_capacity(ndim);

    for (_, axis) in domain.grid_axes() {
        let kind = axis.kind();
        let (label, values) = if field.is_interface(axis.name()).unwrap_or(false) {
            (kind.bounds_name(), axis.bounds())
        } else {
            (kind.dim_name().to_string(), axis.points())
        };

        if dims.contains(&label) {
            warn!(
                axis = axis.name(),
                label = %label,
                "axis folds onto an existing dimension label"
            );
        }

        coords.insert(label.clone(), axis_coordinate(&label, values, axis));
        dims.push(label);
    }

    let permutation = domain.grid().permutation();
    let data = field
        .data()
        .view()
        .permuted_axes(IxDyn(&permutation))
        .as_standard_layout()
        .into_owned();
    debug!(?dims, ?permutation, "field reordered to grid order");

    Ok(LabeledArray::new(data, dims, coords)?)
}
