//! Generic entry point dispatching on the input kind.

use climxr_field::Value;

use crate::error::ConvertError;
use crate::field::field_to_array;
use crate::result::Labeled;
use crate::state::state_to_dataset;

/// Converts a field to a labeled array or a state to a dataset.
///
/// # Errors
///
/// Returns [`ConvertError::UnsupportedInput`] for any other kind of value,
/// and propagates adapter errors otherwise.
pub fn to_labeled(input: &Value) -> Result<Labeled, ConvertError> {
    match input {
        Value::Field(field) => Ok(Labeled::Array(field_to_array(field)?)),
        Value::State(state) => Ok(Labeled::Dataset(state_to_dataset(state)?.into_dataset())),
        other => Err(ConvertError::UnsupportedInput { kind: other.kind() }),
    }
}
