//! Coordinate construction shared by the field and state adapters.

use climxr_field::Axis;
use climxr_labeled::Coordinate;
use ndarray::Array1;

/// Builds a coordinate named `label` from `values`, copying the axis units
/// when the axis has any.
pub(crate) fn axis_coordinate(label: &str, values: &Array1<f64>, axis: &Axis) -> Coordinate {
    let coord = Coordinate::new(label, values.clone());
    match axis.units() {
        Some(units) => coord.with_attr("units", units),
        None => coord,
    }
}
