//! Discrete core of a bead column.
//!
//! This module contains the pure part of the engine:
//! - Digit codec between a digit and its blank indices
//! - Column state mutated by row selections
//! - Transition classification of accepted selections
//! - Bounded value history
//!
//! Nothing here knows about positions, time, or collaborators.

mod classifier;
mod codec;
mod history;
mod state;

pub use classifier::{classify, Classification, Emphasis, Transition};
pub use codec::{
    check_digit, check_row, decode, encode, BlankIndices, MAX_DIGIT, UPPER_BEAD_VALUE,
};
pub use history::{
    ChangeCause, ValueChange, ValueHistory, DEFAULT_HISTORY_CAPACITY, MAX_HISTORY_CAPACITY,
};
pub use state::{BeadGroup, BlankChange, ColumnState, LOWER_ROWS, UPPER_ROWS};
