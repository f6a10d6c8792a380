//! # climxr-convert
//!
//! Adapters from climxr fields and states to labeled arrays and datasets.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | [`Field`](climxr_field::Field) | [`field_to_array`] | [`LabeledArray`](climxr_labeled::LabeledArray) |
//! | [`State`](climxr_field::State) | [`state_to_dataset`] | [`StateConversion`] wrapping a [`Dataset`](climxr_labeled::Dataset) |
//! | [`Value`](climxr_field::Value) | [`to_labeled`] | [`Labeled`] |
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use climxr_convert::field_to_array;
//! use climxr_field::{Axis, Domain, Field};
//! use ndarray::{ArrayD, IxDyn};
//!
//! let lev = Axis::new("lev", vec![750.0, 250.0], vec![1000.0, 500.0, 0.0])
//!     .unwrap()
//!     .with_units("mb");
//! let domain = Arc::new(Domain::from_axes(vec![lev]).unwrap());
//!
//! // Three values on two cells: defined at the level interfaces.
//! let flux = Field::new(ArrayD::zeros(IxDyn(&[3])), domain).unwrap();
//! let arr = field_to_array(&flux).unwrap();
//! assert_eq!(arr.dims(), &["lev_bounds".to_string()]);
//! ```

mod coords;
mod dispatch;
mod error;
mod field;
mod result;
mod state;

pub use dispatch::to_labeled;
pub use error::ConvertError;
pub use field::field_to_array;
pub use result::{Labeled, StateConversion};
pub use state::state_to_dataset;
