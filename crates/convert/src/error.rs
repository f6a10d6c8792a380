//! Error types for the climxr-convert crate.

use climxr_labeled::LabeledError;

/// Error type for all fallible operations in the climxr-convert crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConvertError {
    /// Returned by the generic dispatcher for inputs that are neither a field
    /// nor a state mapping.
    #[error("input must be a field or a state mapping of fields, got {kind}")]
    UnsupportedInput {
        /// Kind of the rejected input.
        kind: &'static str,
    },

    /// Wraps a structural error from the labeled representation.
    #[error("labeled representation: {0}")]
    Labeled(#[from] LabeledError),
}
