//! Build errors for columns.

use crate::error::{ConfigurationError, DomainError};
use thiserror::Error;

/// Errors that can occur when building a column.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    /// The initial value or target is not a digit.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// One or more structural problems, all reported at once.
    #[error("Invalid column configuration ({} problem(s)): {}", .0.len(), describe(.0))]
    InvalidConfiguration(Vec<ConfigurationError>),
}

fn describe(errors: &[ConfigurationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
