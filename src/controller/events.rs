//! Boundary between a column and its collaborators.
//!
//! A column never owns an audio context or a drawing surface. It hands
//! discrete events to [`EventSink`]s and bead poses to a [`Renderer`].

use crate::config::Appearance;
use crate::core::{BeadGroup, Classification, Emphasis};
use crate::motion::{ColumnFrame, ColumnGeometry};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, PoisonError};

/// Discrete notifications emitted by a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnEvent {
    /// Beads of the group snapped onto the rail.
    Seated(BeadGroup),
    /// Beads of the group moved away from the rail.
    Moved(BeadGroup),
    /// The digit changed to this value.
    ValueChanged(u8),
    /// The digit matches the target set by the host.
    Correct(u8),
    /// The digit differs from the target set by the host.
    Incorrect(u8),
}

impl From<Classification> for ColumnEvent {
    fn from(classification: Classification) -> Self {
        match classification.emphasis {
            Emphasis::Stick => Self::Seated(classification.group),
            Emphasis::Move => Self::Moved(classification.group),
        }
    }
}

/// Fire-and-forget receiver of column events (audio, quiz layer, ...).
pub trait EventSink: Send {
    fn on_event(&mut self, event: &ColumnEvent);
}

impl<F> EventSink for F
where
    F: FnMut(&ColumnEvent) + Send,
{
    fn on_event(&mut self, event: &ColumnEvent) {
        self(event)
    }
}

/// Drawing backend fed by a column.
pub trait Renderer {
    /// Static layout, sent once before the first frame.
    fn configure(&mut self, geometry: &ColumnGeometry, appearance: &Appearance);

    /// One frame of bead poses.
    fn draw(&mut self, frame: &ColumnFrame);
}

/// Sink that keeps every event it receives.
///
/// Clones share the same log, so one clone can be handed to a column while
/// the host reads the other.
///
/// # Example
///
/// ```rust
/// use beadboost::controller::{ColumnEvent, EventLog, EventSink};
/// use beadboost::core::BeadGroup;
///
/// let log = EventLog::new();
/// let mut sink = log.clone();
/// sink.on_event(&ColumnEvent::Seated(BeadGroup::Upper));
///
/// assert_eq!(log.events(), vec![ColumnEvent::Seated(BeadGroup::Upper)]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<ColumnEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events so far.
    pub fn events(&self) -> Vec<ColumnEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Remove and return the events so far.
    pub fn drain(&self) -> Vec<ColumnEvent> {
        std::mem::take(&mut *self.events.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl EventSink for EventLog {
    fn on_event(&mut self, event: &ColumnEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(*event);
    }
}
