//! Builder API for ergonomic column construction.
//!
//! # Example
//!
//! ```
//! use beadboost::builder::ColumnBuilder;
//! use beadboost::motion::{ManualClock, SpringParams};
//!
//! let column = ColumnBuilder::new()
//!     .initial_value(8)
//!     .dimensions(100.0, 100.0, 250.0)
//!     .releasing_spring(SpringParams::new(0.04, 0.45))
//!     .clock(ManualClock::new(0.0))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(column.current_value(), 8);
//! ```

pub mod column;
pub mod error;

pub use column::ColumnBuilder;
pub use error::BuildError;
