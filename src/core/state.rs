//! Discrete state of one digit column.
//!
//! A column is two groups of rows separated by the rail. Each group has
//! exactly one empty ("blank") row; every other row holds a bead. The
//! position of the blank in each group is the entire discrete state.

use super::codec::{self, BlankIndices};
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rows in the upper group: one five-bead and one blank.
pub const UPPER_ROWS: usize = 2;

/// Rows in the lower group: four one-beads and one blank.
pub const LOWER_ROWS: usize = 5;

/// The two bead groups of a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BeadGroup {
    /// Above the rail, worth five.
    Upper,
    /// Below the rail, worth one each.
    Lower,
}

impl BeadGroup {
    /// Number of rows in the group, blank included.
    pub fn rows(self) -> usize {
        match self {
            Self::Upper => UPPER_ROWS,
            Self::Lower => LOWER_ROWS,
        }
    }

    /// Number of beads in the group.
    pub fn bead_count(self) -> usize {
        self.rows() - 1
    }

    /// Whether `row` is in the stack touching the rail for a given blank.
    ///
    /// The rail sits below the upper group and above the lower group, so an
    /// upper bead rests when the blank is above it and a lower bead rests
    /// when the blank is below it.
    pub fn is_resting_row(self, row: usize, blank: usize) -> bool {
        match self {
            Self::Upper => row > blank,
            Self::Lower => row < blank,
        }
    }
}

impl fmt::Display for BeadGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upper => f.write_str("upper"),
            Self::Lower => f.write_str("lower"),
        }
    }
}

/// A single accepted move of a group's blank row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlankChange {
    pub group: BeadGroup,
    pub old: usize,
    pub new: usize,
}

/// Discrete state of one column.
///
/// # Example
///
/// ```rust
/// use beadboost::core::{BeadGroup, ColumnState};
///
/// let mut state = ColumnState::from_value(0).unwrap();
/// let change = state.set_blank(BeadGroup::Lower, 3).unwrap();
///
/// assert!(change.is_some());
/// assert_eq!(state.current_value(), 3);
///
/// // Selecting the blank row again is a no-op.
/// assert_eq!(state.set_blank(BeadGroup::Lower, 3).unwrap(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnState {
    blanks: BlankIndices,
}

impl Default for ColumnState {
    /// The column showing zero.
    fn default() -> Self {
        Self {
            blanks: BlankIndices::ZERO,
        }
    }
}

impl ColumnState {
    /// Start from a digit.
    pub fn from_value(value: i64) -> Result<Self, DomainError> {
        Ok(Self {
            blanks: codec::decode(value)?,
        })
    }

    /// Current blank indices.
    pub fn blanks(&self) -> BlankIndices {
        self.blanks
    }

    /// Blank index of `group`.
    pub fn blank(&self, group: BeadGroup) -> usize {
        self.blanks.get(group)
    }

    /// Move the blank of `group` to `new_index`.
    ///
    /// Returns `Ok(None)` without touching anything when `new_index` already
    /// is the blank.
    pub fn set_blank(
        &mut self,
        group: BeadGroup,
        new_index: usize,
    ) -> Result<Option<BlankChange>, DomainError> {
        codec::check_row(group, new_index)?;

        let old = self.blanks.get(group);
        if old == new_index {
            return Ok(None);
        }

        self.blanks.set(group, new_index);
        Ok(Some(BlankChange {
            group,
            old,
            new: new_index,
        }))
    }

    /// The digit currently shown.
    pub fn current_value(&self) -> u8 {
        codec::encode(self.blanks)
    }

    /// Overwrite both groups from an external digit.
    ///
    /// This is a programmatic reset, so it reports no change to classify.
    pub fn apply_external_value(&mut self, value: i64) -> Result<(), DomainError> {
        self.blanks = codec::decode(value)?;
        Ok(())
    }

    /// Rows holding a bead in `group`, ascending.
    pub fn occupied_rows(&self, group: BeadGroup) -> Vec<usize> {
        let blank = self.blank(group);
        (0..group.rows()).filter(|row| *row != blank).collect()
    }

    /// Whether a bead in `row` of `group` rests against the rail.
    pub fn is_resting(&self, group: BeadGroup, row: usize) -> bool {
        group.is_resting_row(row, self.blank(group))
    }
}
