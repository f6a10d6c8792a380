//! Error types for the climxr-labeled crate.

/// Error type for all fallible operations in the climxr-labeled crate.
///
/// Every variant describes a structural inconsistency between data,
/// dimension labels and coordinates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LabeledError {
    /// Returned when the number of dimension labels differs from the data rank.
    #[error("{dims} dimension label(s) for data of rank {ndim}")]
    RankMismatch {
        /// Number of labels supplied.
        dims: usize,
        /// Rank of the data.
        ndim: usize,
    },

    /// Returned when a coordinate refers to a dimension the array does not have.
    #[error("coordinate '{name}' is along unknown dimension '{dim}'")]
    UnknownDimension {
        /// Coordinate name.
        name: String,
        /// Dimension the coordinate claims.
        dim: String,
    },

    /// Returned when a coordinate length differs from its dimension size.
    #[error("coordinate '{name}' has length {got}, dimension size is {expected}")]
    CoordinateLength {
        /// Coordinate name.
        name: String,
        /// Size of the dimension in the data.
        expected: usize,
        /// Length of the coordinate.
        got: usize,
    },

    /// Returned when a dataset entry disagrees with the size already recorded
    /// for one of its dimensions.
    #[error("conflicting sizes for dimension '{dim}': existing {existing}, new {got}")]
    DimensionConflict {
        /// Dimension name.
        dim: String,
        /// Size already present in the dataset.
        existing: usize,
        /// Size of the incoming entry.
        got: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_rank_mismatch() {
        let err = LabeledError::RankMismatch { dims: 1, ndim: 2 };
        assert_eq!(err.to_string(), "1 dimension label(s) for data of rank 2");
    }

    #[test]
    fn display_coordinate_length() {
        let err = LabeledError::CoordinateLength {
            name: "lat".to_string(),
            expected: 90,
            got: 91,
        };
        assert_eq!(
            err.to_string(),
            "coordinate 'lat' has length 91, dimension size is 90"
        );
    }

    #[test]
    fn display_dimension_conflict() {
        let err = LabeledError::DimensionConflict {
            dim: "lev_bounds".to_string(),
            existing: 31,
            got: 27,
        };
        assert_eq!(
            err.to_string(),
            "conflicting sizes for dimension 'lev_bounds': existing 31, new 27"
        );
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<LabeledError>();
    }
}
