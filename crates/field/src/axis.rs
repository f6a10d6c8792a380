//! Coordinate axes and the fixed axis-name vocabulary.

use ndarray::Array1;

use crate::error::FieldError;

/// Axis category drawn from the fixed vocabulary.
///
/// Any axis name outside `lev`, `lat`, `lon` and `depth` folds into
/// [`AxisKind::Abstract`]. Several distinct non-vocabulary axes therefore
/// share the single dimension name `abstract`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisKind {
    /// Vertical level (pressure or height).
    Lev,
    /// Latitude.
    Lat,
    /// Longitude.
    Lon,
    /// Ocean or soil depth.
    Depth,
    /// Catch-all for every other axis name.
    Abstract,
}

impl AxisKind {
    /// Every vocabulary entry, fallback last.
    pub const ALL: [AxisKind; 5] = [
        AxisKind::Lev,
        AxisKind::Lat,
        AxisKind::Lon,
        AxisKind::Depth,
        AxisKind::Abstract,
    ];

    /// Classifies an axis name. Unknown names map to `Abstract`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "lev" => Self::Lev,
            "lat" => Self::Lat,
            "lon" => Self::Lon,
            "depth" => Self::Depth,
            _ => Self::Abstract,
        }
    }

    /// Dimension name used in labeled output.
    pub fn dim_name(self) -> &'static str {
        match self {
            Self::Lev => "lev",
            Self::Lat => "lat",
            Self::Lon => "lon",
            Self::Depth => "depth",
            Self::Abstract => "abstract",
        }
    }

    /// Dimension name of the cell-boundary counterpart, e.g. `lat_bounds`.
    pub fn bounds_name(self) -> String {
        format!("{}_bounds", self.dim_name())
    }
}

/// One coordinate axis: cell centers, cell boundaries and optional units.
///
/// Invariant: `bounds.len() == points.len() + 1` and all values are finite.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    name: String,
    points: Array1<f64>,
    bounds: Array1<f64>,
    units: Option<String>,
}

impl Axis {
    /// Creates an axis from center points and boundary values.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::EmptyAxis`] if `points` is empty,
    /// [`FieldError::BoundsLength`] if `bounds` is not one longer than
    /// `points`, and [`FieldError::NonFinite`] for NaN or infinite values.
    pub fn new(
        name: impl Into<String>,
        points: impl Into<Array1<f64>>,
        bounds: impl Into<Array1<f64>>,
    ) -> Result<Self, FieldError> {
        let name = name.into();
        let points = points.into();
        let bounds = bounds.into();

        if points.is_empty() {
            return Err(FieldError::EmptyAxis { name });
        }
        if bounds.len() != points.len() + 1 {
            return Err(FieldError::BoundsLength {
                name,
                points: points.len(),
                bounds: bounds.len(),
            });
        }
        if points.iter().chain(bounds.iter()).any(|v| !v.is_finite()) {
            return Err(FieldError::NonFinite { name });
        }

        Ok(Self {
            name,
            points,
            bounds,
            units: None,
        })
    }

    /// Attaches a units string.
    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    /// Axis name as registered in the domain.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Vocabulary category of this axis.
    pub fn kind(&self) -> AxisKind {
        AxisKind::from_name(&self.name)
    }

    /// Cell-center coordinate values.
    pub fn points(&self) -> &Array1<f64> {
        &self.points
    }

    /// Cell-boundary coordinate values.
    pub fn bounds(&self) -> &Array1<f64> {
        &self.bounds
    }

    /// Units, if any were attached.
    pub fn units(&self) -> Option<&str> {
        self.units.as_deref()
    }

    /// Number of cells along this axis.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; axes are non-empty by construction.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn vocabulary_names_map_to_themselves() {
        for kind in AxisKind::ALL {
            assert_eq!(AxisKind::from_name(kind.dim_name()), kind);
        }
    }

    #[test]
    fn unknown_names_fold_to_abstract() {
        assert_eq!(AxisKind::from_name("time"), AxisKind::Abstract);
        assert_eq!(AxisKind::from_name("latitude"), AxisKind::Abstract);
        assert_eq!(AxisKind::from_name("Lat"), AxisKind::Abstract);
        assert_eq!(AxisKind::from_name(""), AxisKind::Abstract);
    }

    #[test]
    fn bounds_name_appends_suffix() {
        assert_eq!(AxisKind::Lat.bounds_name(), "lat_bounds");
        assert_eq!(AxisKind::Abstract.bounds_name(), "abstract_bounds");
    }

    #[test]
    fn axis_valid_construction() {
        let ax = Axis::new("lat", array![-45.0, 45.0], array![-90.0, 0.0, 90.0])
            .unwrap()
            .with_units("degrees_north");
        assert_eq!(ax.name(), "lat");
        assert_eq!(ax.kind(), AxisKind::Lat);
        assert_eq!(ax.len(), 2);
        assert!(!ax.is_empty());
        assert_eq!(ax.units(), Some("degrees_north"));
        assert_eq!(ax.bounds(), &array![-90.0, 0.0, 90.0]);
    }

    #[test]
    fn axis_from_vecs() {
        let ax = Axis::new("lev", vec![500.0], vec![1000.0, 0.0]).unwrap();
        assert_eq!(ax.points().to_vec(), vec![500.0]);
        assert_eq!(ax.units(), None);
    }

    #[test]
    fn axis_rejects_empty_points() {
        let err = Axis::new("lon", Vec::<f64>::new(), vec![0.0]).unwrap_err();
        assert_eq!(
            err,
            FieldError::EmptyAxis {
                name: "lon".to_string()
            }
        );
    }

    #[test]
    fn axis_rejects_bad_bounds_length() {
        let err = Axis::new("lon", vec![0.0, 1.0], vec![0.0, 1.0]).unwrap_err();
        assert!(matches!(
            err,
            FieldError::BoundsLength {
                points: 2,
                bounds: 2,
                ..
            }
        ));
    }

    #[test]
    fn axis_rejects_non_finite() {
        let err = Axis::new("depth", vec![f64::NAN], vec![0.0, 1.0]).unwrap_err();
        assert!(matches!(err, FieldError::NonFinite { .. }));

        let err = Axis::new("depth", vec![1.0], vec![0.0, f64::INFINITY]).unwrap_err();
        assert!(matches!(err, FieldError::NonFinite { .. }));
    }
}
