//! # climxr-labeled
//!
//! Labeled arrays and datasets: n-dimensional data whose dimensions carry
//! names, one-dimensional coordinate variables and free-form attributes.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `coordinate` | 1-D coordinate variables and attribute maps |
//! | `array` | Single labeled array |
//! | `dataset` | Named arrays sharing dimensions and coordinates |
//! | `error` | Error types |

mod array;
mod coordinate;
mod dataset;
mod error;

pub use array::LabeledArray;
pub use coordinate::{Attrs, Coordinate};
pub use dataset::Dataset;
pub use error::LabeledError;
