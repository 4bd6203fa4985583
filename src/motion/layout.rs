//! Static geometry of a column.
//!
//! Coordinates run down the column axis: the upper group starts at 0, the
//! rail follows it, and the lower group starts below the rail.

use crate::core::BeadGroup;
use serde::{Deserialize, Serialize};

/// Minimum rail thickness.
pub const MIN_RAIL_HEIGHT: f64 = 10.0;

/// Rail thickness relative to an upper row.
pub const RAIL_TO_UPPER_ROW: f64 = 0.6;

/// Row geometry handed to renderers once at construction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColumnGeometry {
    pub width: f64,
    pub upper_height: f64,
    pub lower_height: f64,
    pub rail_height: f64,
}

impl ColumnGeometry {
    /// Derive the geometry from the group heights.
    ///
    /// Callers validate that all dimensions are positive.
    pub fn new(width: f64, upper_height: f64, lower_height: f64) -> Self {
        let upper_row = upper_height / BeadGroup::Upper.rows() as f64;
        Self {
            width,
            upper_height,
            lower_height,
            rail_height: MIN_RAIL_HEIGHT.max(upper_row * RAIL_TO_UPPER_ROW),
        }
    }

    /// Height of one row in `group`.
    pub fn row_height(&self, group: BeadGroup) -> f64 {
        let height = match group {
            BeadGroup::Upper => self.upper_height,
            BeadGroup::Lower => self.lower_height,
        };
        height / group.rows() as f64
    }

    /// Coordinate where `group` begins.
    pub fn group_origin(&self, group: BeadGroup) -> f64 {
        match group {
            BeadGroup::Upper => 0.0,
            BeadGroup::Lower => self.upper_height + self.rail_height,
        }
    }

    /// Coordinate of the top edge of `row`.
    pub fn row_top(&self, group: BeadGroup, row: usize) -> f64 {
        self.group_origin(group) + row as f64 * self.row_height(group)
    }

    /// Coordinate of the centre of `row`; beads aim here.
    pub fn row_center(&self, group: BeadGroup, row: usize) -> f64 {
        self.row_top(group, row) + self.row_height(group) / 2.0
    }

    /// Centre of the rail.
    pub fn rail_center(&self) -> f64 {
        self.upper_height + self.rail_height / 2.0
    }

    /// Bead radius in `group`: half a row.
    pub fn bead_radius(&self, group: BeadGroup) -> f64 {
        self.row_height(group) * 0.5
    }

    /// Full height of the column.
    pub fn total_height(&self) -> f64 {
        self.upper_height + self.rail_height + self.lower_height
    }

    /// Row under a coordinate, if any.
    ///
    /// Hosts use this to turn a pointer position into a selection.
    pub fn hit_test(&self, y: f64) -> Option<(BeadGroup, usize)> {
        [BeadGroup::Upper, BeadGroup::Lower]
            .into_iter()
            .find_map(|group| {
                let offset = y - self.group_origin(group);
                let row = (offset / self.row_height(group)).floor();
                (offset >= 0.0 && row < group.rows() as f64).then_some((group, row as usize))
            })
    }
}
