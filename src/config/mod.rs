//! Column configuration.
//!
//! `ColumnConfig` is plain serde data with a default for every field.
//! Structural checks run through `stillwater::Validation` so that all
//! violations are collected instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use beadboost::config::{validate, ColumnConfig};
//!
//! let config = ColumnConfig {
//!     width: 0.0,
//!     upper_height: -1.0,
//!     ..ColumnConfig::default()
//! };
//! assert!(validate(&config).is_failure());
//! ```

mod schema;
mod validation;

pub use schema::{Appearance, ColumnConfig};
pub use validation::{into_result, validate, ConfigValidation};
