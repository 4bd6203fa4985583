//! BeadBoost: a soroban bead-column engine
//!
//! Models one digit column of an abacus: a user clicks rows to set a digit,
//! beads spring toward their new rows, and beads arriving on or leaving the
//! rail produce emphasis events for audio and visual feedback.
//!
//! The engine follows a "pure core, imperative shell" layout. Drawing and
//! sound are left to collaborators behind the `Renderer` and `EventSink`
//! traits.
//!
//! # Core Concepts
//!
//! - **Digit codec**: a digit is two blank indices, one per bead group
//! - **Transitions**: every accepted click seats or releases a whole group
//! - **Motion**: a discrete spring per bead, stiffer for seating than releasing
//! - **Controller**: owns one column and ties the pieces together
//!
//! # Example
//!
//! ```rust
//! use beadboost::builder::ColumnBuilder;
//! use beadboost::controller::ColumnEvent;
//! use beadboost::core::{BeadGroup, Transition};
//!
//! let mut column = ColumnBuilder::new().initial_value(3).build().unwrap();
//!
//! let events = column.on_user_select(BeadGroup::Upper, 0).unwrap();
//! assert_eq!(column.current_value(), 8);
//! assert_eq!(events[0], ColumnEvent::Seated(BeadGroup::Upper));
//! assert_eq!(column.beads()[0].last_transition(), Transition::Seating);
//!
//! let frame = column.tick();
//! assert_eq!(frame.beads.len(), 5);
//! ```

pub mod builder;
pub mod config;
pub mod controller;
pub mod core;
pub mod error;
pub mod motion;

// Re-export commonly used types
pub use builder::{BuildError, ColumnBuilder};
pub use config::ColumnConfig;
pub use controller::{Abacus, ColumnController, ColumnEvent, EventSink, Renderer};
pub use crate::core::{BeadGroup, ColumnState, Transition};
pub use error::{ConfigurationError, DomainError};
