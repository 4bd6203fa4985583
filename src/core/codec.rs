//! Digit codec: conversion between a digit and its two blank indices.

use super::state::{BeadGroup, LOWER_ROWS, UPPER_ROWS};
use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Largest digit a single column can show.
pub const MAX_DIGIT: u8 = 9;

/// Value contributed by the upper bead when it sits against the rail.
pub const UPPER_BEAD_VALUE: u8 = 5;

/// The discrete bead layout of one column.
///
/// Only in-range indices can be represented, so [`encode`] has no failure
/// path.
///
/// # Example
///
/// ```rust
/// use beadboost::core::{decode, encode, BlankIndices};
///
/// let blanks = decode(7).unwrap();
/// assert_eq!(blanks.upper(), 0);
/// assert_eq!(blanks.lower(), 2);
/// assert_eq!(encode(blanks), 7);
///
/// assert!(BlankIndices::new(2, 0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBlanks")]
pub struct BlankIndices {
    upper: usize,
    lower: usize,
}

#[derive(Deserialize)]
struct RawBlanks {
    upper: usize,
    lower: usize,
}

impl TryFrom<RawBlanks> for BlankIndices {
    type Error = DomainError;

    fn try_from(raw: RawBlanks) -> Result<Self, Self::Error> {
        Self::new(raw.upper, raw.lower)
    }
}

impl BlankIndices {
    /// Layout of the digit zero: upper bead away, no lower bead seated.
    pub const ZERO: Self = Self { upper: 1, lower: 0 };

    /// Build a layout, rejecting indices outside either group.
    pub fn new(upper: usize, lower: usize) -> Result<Self, DomainError> {
        check_row(BeadGroup::Upper, upper)?;
        check_row(BeadGroup::Lower, lower)?;
        Ok(Self { upper, lower })
    }

    /// Blank index of the upper group.
    pub fn upper(&self) -> usize {
        self.upper
    }

    /// Blank index of the lower group.
    pub fn lower(&self) -> usize {
        self.lower
    }

    /// Blank index of `group`.
    pub fn get(&self, group: BeadGroup) -> usize {
        match group {
            BeadGroup::Upper => self.upper,
            BeadGroup::Lower => self.lower,
        }
    }

    pub(crate) fn set(&mut self, group: BeadGroup, index: usize) {
        match group {
            BeadGroup::Upper => self.upper = index,
            BeadGroup::Lower => self.lower = index,
        }
    }
}

/// Ensure `row` addresses a row of `group`.
pub fn check_row(group: BeadGroup, row: usize) -> Result<(), DomainError> {
    let rows = group.rows();
    if row < rows {
        Ok(())
    } else {
        Err(DomainError::RowOutOfRange { group, row, rows })
    }
}

/// Ensure `value` is a digit, converting it to `u8`.
pub fn check_digit(value: i64) -> Result<u8, DomainError> {
    u8::try_from(value)
        .ok()
        .filter(|digit| *digit <= MAX_DIGIT)
        .ok_or(DomainError::DigitOutOfRange { value })
}

/// Split a digit into its blank indices.
///
/// Fails with [`DomainError::DigitOutOfRange`] outside `0..=9`.
pub fn decode(value: i64) -> Result<BlankIndices, DomainError> {
    let digit = check_digit(value)? as usize;
    let five = UPPER_BEAD_VALUE as usize;
    let (upper, lower) = if digit >= five {
        (0, digit - five)
    } else {
        (UPPER_ROWS - 1, digit)
    };
    debug_assert!(lower < LOWER_ROWS);
    Ok(BlankIndices { upper, lower })
}

/// Recover the digit shown by a layout.
pub fn encode(blanks: BlankIndices) -> u8 {
    let upper = if blanks.upper == 0 { UPPER_BEAD_VALUE } else { 0 };
    // lower < LOWER_ROWS, so the cast cannot truncate
    upper + blanks.lower as u8
}
