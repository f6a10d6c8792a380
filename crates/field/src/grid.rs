//! Canonical axis order and storage positions.

use indexmap::IndexMap;

use crate::error::FieldError;

/// Ordered axis names plus the storage position of each axis in a field's
/// array.
///
/// The grid order is the canonical order used for labeled output; the
/// storage position says where that axis physically lives in the data. The
/// two need not agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    axes: Vec<String>,
    axis_index: IndexMap<String, usize>,
}

impl Grid {
    /// Creates a grid from its canonical axis order and storage positions.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::DuplicateAxis`] if an axis name repeats,
    /// [`FieldError::MissingPosition`] if an axis has no storage position, and
    /// [`FieldError::InvalidPositions`] if the positions are not a
    /// permutation of `0..axes.len()`.
    pub fn new(
        axes: Vec<String>,
        axis_index: IndexMap<String, usize>,
    ) -> Result<Self, FieldError> {
        let n = axes.len();
        let mut positions = Vec::with_capacity(n);
        for (i, name) in axes.iter().enumerate() {
            if axes[..i].contains(name) {
                return Err(FieldError::DuplicateAxis { name: name.clone() });
            }
            let pos = axis_index
                .get(name)
                .copied()
                .ok_or_else(|| FieldError::MissingPosition { name: name.clone() })?;
            positions.push(pos);
        }

        let mut seen = vec![false; n];
        for &pos in &positions {
            if pos >= n || seen[pos] {
                return Err(FieldError::InvalidPositions {
                    positions: positions.clone(),
                    n,
                });
            }
            seen[pos] = true;
        }

        // Entries for names outside the grid are dropped.
        let axis_index = axes
            .iter()
            .zip(positions)
            .map(|(name, pos)| (name.clone(), pos))
            .collect();

        Ok(Self { axes, axis_index })
    }

    /// Grid whose storage order equals its canonical order.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::DuplicateAxis`] if an axis name repeats.
    pub fn in_storage_order<S: Into<String>>(
        axes: impl IntoIterator<Item = S>,
    ) -> Result<Self, FieldError> {
        let axes: Vec<String> = axes.into_iter().map(Into::into).collect();
        let axis_index = axes
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        Self::new(axes, axis_index)
    }

    /// Axis names in canonical order.
    pub fn axes(&self) -> &[String] {
        &self.axes
    }

    /// Storage position of `name`, or `None` if the axis is not on this grid.
    pub fn axis_index(&self, name: &str) -> Option<usize> {
        self.axis_index.get(name).copied()
    }

    /// Storage positions listed in canonical order.
    ///
    /// This is the permutation that reorders stored data into grid order.
    pub fn permutation(&self) -> Vec<usize> {
        self.axes
            .iter()
            .filter_map(|name| self.axis_index(name))
            .collect()
    }

    /// Inverse of [`Grid::permutation`]: grid position of each storage axis.
    ///
    /// Reorders grid-ordered data back into storage order.
    pub fn inverse_permutation(&self) -> Vec<usize> {
        let mut inverse = vec![0; self.axes.len()];
        for (grid_pos, pos) in self.permutation().into_iter().enumerate() {
            inverse[pos] = grid_pos;
        }
        inverse
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.axes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(pairs: &[(&str, usize)]) -> IndexMap<String, usize> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn storage_order_grid_is_identity() {
        let grid = Grid::in_storage_order(["lev", "lat"]).unwrap();
        assert_eq!(grid.axes(), &["lev".to_string(), "lat".to_string()]);
        assert_eq!(grid.axis_index("lev"), Some(0));
        assert_eq!(grid.axis_index("lat"), Some(1));
        assert_eq!(grid.permutation(), vec![0, 1]);
        assert_eq!(grid.inverse_permutation(), vec![0, 1]);
        assert_eq!(grid.ndim(), 2);
    }

    #[test]
    fn reordered_grid_permutation() {
        // Data stored as (lon, lev, lat), canonical order (lev, lat, lon).
        let grid = Grid::new(
            vec!["lev".into(), "lat".into(), "lon".into()],
            index(&[("lon", 0), ("lev", 1), ("lat", 2)]),
        )
        .unwrap();
        assert_eq!(grid.permutation(), vec![1, 2, 0]);
        assert_eq!(grid.inverse_permutation(), vec![2, 0, 1]);
    }

    #[test]
    fn unknown_axis_has_no_index() {
        let grid = Grid::in_storage_order(["lat"]).unwrap();
        assert_eq!(grid.axis_index("lon"), None);
    }

    #[test]
    fn extra_index_entries_are_dropped() {
        let grid = Grid::new(vec!["lat".into()], index(&[("lat", 0), ("lon", 1)])).unwrap();
        assert_eq!(grid.axis_index("lon"), None);
    }

    #[test]
    fn rejects_missing_position() {
        let err = Grid::new(vec!["lat".into(), "lon".into()], index(&[("lat", 0)])).unwrap_err();
        assert_eq!(
            err,
            FieldError::MissingPosition {
                name: "lon".to_string()
            }
        );
    }

    #[test]
    fn rejects_repeated_position() {
        let err = Grid::new(
            vec!["lat".into(), "lon".into()],
            index(&[("lat", 0), ("lon", 0)]),
        )
        .unwrap_err();
        assert!(matches!(err, FieldError::InvalidPositions { n: 2, .. }));
    }

    #[test]
    fn rejects_out_of_range_position() {
        let err = Grid::new(vec!["lat".into()], index(&[("lat", 1)])).unwrap_err();
        assert!(matches!(err, FieldError::InvalidPositions { n: 1, .. }));
    }

    #[test]
    fn rejects_duplicate_axis() {
        let err = Grid::in_storage_order(["lat", "lat"]).unwrap_err();
        assert_eq!(
            err,
            FieldError::DuplicateAxis {
                name: "lat".to_string()
            }
        );
    }
}
