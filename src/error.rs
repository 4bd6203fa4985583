//! Error kinds shared across the crate.

use crate::core::BeadGroup;
use thiserror::Error;

/// A value or row index outside its valid range.
///
/// Domain errors fail fast. Nothing in the crate clamps silently, because a
/// clamped value would no longer round-trip through the digit codec.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Digit {value} is outside 0..=9")]
    DigitOutOfRange { value: i64 },

    #[error("Row {row} is outside the {group} group (rows: {rows})")]
    RowOutOfRange {
        group: BeadGroup,
        row: usize,
        rows: usize,
    },
}

/// Malformed construction parameters.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigurationError {
    #[error("{field} must be positive and finite (got {value})")]
    NonPositiveDimension { field: &'static str, value: f64 },

    #[error("{name} spring needs stiffness > 0 and 0 < damping < 1 (got stiffness {stiffness}, damping {damping})")]
    InvalidSpring {
        name: &'static str,
        stiffness: f64,
        damping: f64,
    },

    #[error("Frame rate must be positive and finite (got {value})")]
    InvalidFrameRate { value: f64 },

    #[error("Catch-up frame limit must be at least 1")]
    NoCatchUpFrames,

    #[error("History capacity {capacity} exceeds the limit of {max}")]
    HistoryTooLarge { capacity: usize, max: usize },
}
