//! State adapter: a named collection of fields to one dataset.

use climxr_field::State;
use climxr_labeled::Dataset;
use tracing::{debug, warn};

use crate::coords::axis_coordinate;
use crate::error::ConvertError;
use crate::field::field_to_array;
use crate::result::StateConversion;

/// Converts a state mapping into a dataset.
///
/// Each field entry becomes a data variable under its key. For every axis in
/// that field's domain registry a shared `<dim>_bounds` coordinate is set
/// from the axis boundaries, overwriting any earlier one of the same name.
/// Entries that are not fields are skipped with a warning and listed in
/// [`StateConversion::excluded`].
///
/// # Errors
///
/// Returns [`ConvertError::Labeled`] when two fields disagree on the size of
/// a shared dimension, or when a single field cannot be converted (see
/// [`field_to_array`]).
#[tracing::instrument(skip_all, fields(n_entries = state.len()))]
pub fn state_to_dataset(state: &State) -> Result<StateConversion, ConvertError> {
    let mut dataset = Dataset::new();
    let mut excluded = Vec::new();

    for (name, value) in state {
        let Some(field) = value.as_field() else {
            warn!(
                kind = value.kind(),
                "{name} excluded from dataset because it is not a field"
            );
            excluded.push(name.clone());
            continue;
        };

        dataset.insert_var(name, field_to_array(field)?)?;

        for (_, axis) in field.domain().axes() {
            let bounds_name = axis.kind().bounds_name();
            let coord = axis_coordinate(&bounds_name, axis.bounds(), axis);
            dataset.set_coord(&bounds_name, coord)?;
        }
        debug!(name = %name, "field added to dataset");
    }

    Ok(StateConversion::new(dataset, excluded))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use climxr_field::{Axis, Domain, Field, Value};
    use ndarray::{ArrayD, IxDyn};

    fn surface() -> Arc<Domain> {
        let lat = Axis::new("lat", vec![-45.0, 45.0], vec![-90.0, 0.0, 90.0])
            .unwrap()
            .with_units("degrees_north");
        Arc::new(Domain::from_axes(vec![lat]).unwrap())
    }

    #[test]
    fn empty_state() {
        let out = state_to_dataset(&State::new()).unwrap();
        assert!(out.dataset().is_empty());
        assert!(out.excluded().is_empty());
    }

    #[test]
    fn single_field_gets_bounds_coordinate() {
        let mut state = State::new();
        let ts = Field::new(ArrayD::from_elem(IxDyn(&[2]), 288.0), surface()).unwrap();
        state.insert("Ts".into(), Value::Field(ts));

        let out = state_to_dataset(&state).unwrap();
        let ds = out.dataset();
        assert!(ds.contains("Ts"));
        let bounds = ds.coord("lat_bounds").unwrap();
        assert_eq!(bounds.values().to_vec(), vec![-90.0, 0.0, 90.0]);
        assert_eq!(bounds.units(), Some("degrees_north"));
        assert_eq!(ds.dims().get("lat_bounds"), Some(&3));
    }

    #[test]
    fn nested_state_is_excluded() {
        let mut state = State::new();
        state.insert("inner".into(), Value::State(State::new()));
        let out = state_to_dataset(&state).unwrap();
        assert_eq!(out.excluded(), &["inner".to_string()]);
    }
}
