//! # climxr-field
//!
//! Labeled-grid data model: coordinate axes, grids, domains and the fields
//! that live on them.
//!
//! ## Architecture
//!
//! ```text
//! Axis (points, bounds, units)
//!   └─ Domain ── Grid (canonical order, storage positions)
//!        └─ Field (ArrayD<f64> in storage order + interfaces flag)
//!             └─ Value / State (tagged inputs for conversion)
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use climxr_field::{Axis, Domain, Field};
//! use ndarray::{ArrayD, IxDyn};
//!
//! let lat = Axis::new("lat", vec![-45.0, 45.0], vec![-90.0, 0.0, 90.0])
//!     .unwrap()
//!     .with_units("degrees_north");
//! let domain = Arc::new(Domain::from_axes(vec![lat]).unwrap());
//!
//! let ts = Field::new(ArrayD::from_elem(IxDyn(&[2]), 288.0), domain).unwrap();
//! assert_eq!(ts.is_interface("lat"), Some(false));
//! ```

mod axis;
mod domain;
mod error;
mod field;
mod grid;
mod value;

pub use axis::{Axis, AxisKind};
pub use domain::Domain;
pub use error::FieldError;
pub use field::Field;
pub use grid::Grid;
pub use value::{State, Value};
