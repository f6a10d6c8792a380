//! Integration tests for fields stored in a non-canonical axis order.

use std::sync::Arc;

use climxr_field::{Axis, Domain, Field, FieldError, Grid};
use indexmap::IndexMap;
use ndarray::{ArrayD, IxDyn};

/// Domain with canonical order (lev, lat) but data stored as (lat, lev).
fn transposed_domain() -> Arc<Domain> {
    let lev = Axis::new("lev", vec![750.0, 250.0], vec![1000.0, 500.0, 0.0])
        .unwrap()
        .with_units("mb");
    let lat = Axis::new("lat", vec![-60.0, 0.0, 60.0], vec![-90.0, -30.0, 30.0, 90.0])
        .unwrap()
        .with_units("degrees_north");
    let index: IndexMap<String, usize> = [("lat".to_string(), 0), ("lev".to_string(), 1)]
        .into_iter()
        .collect();
    let grid = Grid::new(vec!["lev".into(), "lat".into()], index).unwrap();
    Arc::new(Domain::new(grid, vec![lev, lat]).unwrap())
}

#[test]
fn centered_field_in_storage_order() {
    let dom = transposed_domain();
    assert_eq!(dom.grid().permutation(), vec![1, 0]);

    let f = Field::new(ArrayD::zeros(IxDyn(&[3, 2])), Arc::clone(&dom)).unwrap();
    assert_eq!(f.interfaces(), &[false, false]);
    assert_eq!(f.is_interface("lev"), Some(false));
    assert_eq!(f.is_interface("lat"), Some(false));
}

#[test]
fn interface_flag_is_indexed_by_storage_position() {
    // lev interfaces live at storage position 1.
    let f = Field::new(ArrayD::zeros(IxDyn(&[3, 3])), transposed_domain()).unwrap();
    assert_eq!(f.interfaces(), &[false, true]);
    assert_eq!(f.is_interface("lev"), Some(true));
    assert_eq!(f.is_interface("lat"), Some(false));
}

#[test]
fn canonical_shape_is_rejected_when_storage_differs() {
    // (lev=2, lat=3) is the canonical shape; storage expects (lat, lev).
    let err = Field::new(ArrayD::zeros(IxDyn(&[2, 3])), transposed_domain()).unwrap_err();
    assert!(matches!(err, FieldError::ShapeMismatch { .. }));
}

#[test]
fn units_are_optional_per_axis() {
    let dom = transposed_domain();
    assert_eq!(dom.axis("lev").and_then(|a| a.units()), Some("mb"));

    let bare = Axis::new("depth", vec![5.0], vec![0.0, 10.0]).unwrap();
    let dom = Domain::from_axes(vec![bare]).unwrap();
    assert_eq!(dom.axis("depth").and_then(|a| a.units()), None);
}
