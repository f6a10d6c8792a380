//! Conversion result types.

use climxr_labeled::{Dataset, LabeledArray};

/// Output of [`state_to_dataset`](crate::state_to_dataset).
#[derive(Debug, Clone, PartialEq)]
pub struct StateConversion {
    dataset: Dataset,
    excluded: Vec<String>,
}

impl StateConversion {
    pub(crate) fn new(dataset: Dataset, excluded: Vec<String>) -> Self {
        Self { dataset, excluded }
    }

    /// The converted dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Keys skipped because their value was not a field, in state order.
    pub fn excluded(&self) -> &[String] {
        &self.excluded
    }

    /// Consumes the result and returns the dataset.
    pub fn into_dataset(self) -> Dataset {
        self.dataset
    }
}

/// Output of the generic [`to_labeled`](crate::to_labeled) dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub enum Labeled {
    /// A single field became a labeled array.
    Array(LabeledArray),
    /// A state mapping became a dataset.
    Dataset(Dataset),
}

impl Labeled {
    /// Returns the array, if this is one.
    pub fn as_array(&self) -> Option<&LabeledArray> {
        match self {
            Self::Array(a) => Some(a),
            Self::Dataset(_) => None,
        }
    }

    /// Returns the dataset, if this is one.
    pub fn as_dataset(&self) -> Option<&Dataset> {
        match self {
            Self::Array(_) => None,
            Self::Dataset(d) => Some(d),
        }
    }
}
