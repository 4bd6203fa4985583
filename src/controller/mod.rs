//! Column controllers and their collaborator interfaces.
//!
//! This is the imperative shell around the pure core: it owns the state,
//! drives the motion model once per frame, and hands events and poses to
//! injected collaborators.

mod abacus;
mod column;
mod events;

pub use abacus::Abacus;
pub use column::ColumnController;
pub use events::{ColumnEvent, EventLog, EventSink, Renderer};
