//! Error types for the climxr-field crate.

/// Error type for all fallible constructors in the climxr-field crate.
///
/// Covers malformed axes, grids whose position map is not a permutation,
/// domains missing a registered axis, and fields whose data shape does not
/// fit their domain.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    /// Returned when an axis has no center points.
    #[error("axis '{name}' has no points")]
    EmptyAxis {
        /// Name of the offending axis.
        name: String,
    },

    /// Returned when the bounds array is not exactly one longer than the points.
    #[error("axis '{name}' has {bounds} bounds for {points} points (expected {})", points + 1)]
    BoundsLength {
        /// Name of the offending axis.
        name: String,
        /// Number of center points.
        points: usize,
        /// Number of boundary values supplied.
        bounds: usize,
    },

    /// Returned when an axis carries NaN or infinite coordinate values.
    #[error("axis '{name}' contains non-finite coordinate values")]
    NonFinite {
        /// Name of the offending axis.
        name: String,
    },

    /// Returned when an axis name appears twice in a grid or domain.
    #[error("duplicate axis '{name}'")]
    DuplicateAxis {
        /// The repeated axis name.
        name: String,
    },

    /// Returned when a grid axis has no storage position.
    #[error("grid axis '{name}' has no storage position")]
    MissingPosition {
        /// Name of the axis without a position.
        name: String,
    },

    /// Returned when storage positions are not a permutation of `0..n`.
    #[error("storage positions {positions:?} are not a permutation of 0..{n}")]
    InvalidPositions {
        /// The positions in grid order.
        positions: Vec<usize>,
        /// Number of grid axes.
        n: usize,
    },

    /// Returned when a grid axis has no coordinate axis registered in the domain.
    #[error("grid axis '{name}' is not registered in the domain")]
    UnregisteredAxis {
        /// Name of the missing axis.
        name: String,
    },

    /// Returned when the field data rank differs from the number of grid axes.
    #[error("field has {got} dimensions but the domain grid has {expected} axes")]
    RankMismatch {
        /// Number of grid axes.
        expected: usize,
        /// Number of data dimensions.
        got: usize,
    },

    /// Returned when an axis length matches neither the points nor the bounds.
    #[error("axis '{axis}' has length {got}, expected {points} (centers) or {bounds} (interfaces)")]
    ShapeMismatch {
        /// Name of the axis.
        axis: String,
        /// Length found in the data.
        got: usize,
        /// Number of center points on the axis.
        points: usize,
        /// Number of bounds on the axis.
        bounds: usize,
    },

    /// Returned when an explicit interfaces vector has the wrong length.
    #[error("interfaces flag has {got} entries for {expected} axes")]
    InterfacesLength {
        /// Number of grid axes.
        expected: usize,
        /// Number of flags supplied.
        got: usize,
    },
}
