//! Column controller: the single owner of a column's state.

use super::events::{ColumnEvent, EventSink, Renderer};
use crate::builder::BuildError;
use crate::config::{into_result, validate, Appearance, ColumnConfig};
use crate::core::{
    check_digit, classify, BeadGroup, ChangeCause, ColumnState, ValueChange, ValueHistory,
};
use crate::error::DomainError;
use crate::motion::{
    Bead, Clock, ColumnFrame, ColumnGeometry, FrameTimer, MotionModel, SystemClock,
};
use chrono::Utc;
use std::fmt;
use std::time::Duration;

/// One digit column: discrete state, bead motion and event dispatch.
///
/// All mutation goes through `&mut self`, so a column is driven from a
/// single event/animation loop.
///
/// # Example
///
/// ```rust
/// use beadboost::builder::ColumnBuilder;
/// use beadboost::controller::ColumnEvent;
/// use beadboost::core::BeadGroup;
///
/// let mut column = ColumnBuilder::new().initial_value(0).build().unwrap();
///
/// let events = column.on_user_select(BeadGroup::Lower, 3).unwrap();
/// assert_eq!(column.current_value(), 3);
/// assert!(events.contains(&ColumnEvent::Seated(BeadGroup::Lower)));
/// assert!(events.contains(&ColumnEvent::ValueChanged(3)));
///
/// for _ in 0..600 {
///     column.tick();
/// }
/// assert!(column.is_settled(1e-3));
/// ```
pub struct ColumnController {
    state: ColumnState,
    motion: MotionModel,
    appearance: Appearance,
    target: Option<u8>,
    clock: Box<dyn Clock>,
    timer: FrameTimer,
    sinks: Vec<Box<dyn EventSink>>,
    history: ValueHistory,
}

impl fmt::Debug for ColumnController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnController")
            .field("state", &self.state)
            .field("target", &self.target)
            .field("beads", &self.motion.beads())
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

impl ColumnController {
    /// Build a column from `config`, animating its wobble on the wall clock.
    pub fn new(config: &ColumnConfig) -> Result<Self, BuildError> {
        Self::with_clock(config, Box::new(SystemClock))
    }

    /// Build a column from `config` with an explicit time source.
    ///
    /// Structural problems are all reported together as
    /// [`BuildError::InvalidConfiguration`]; an initial value outside
    /// `0..=9` is a [`BuildError::Domain`].
    pub fn with_clock(config: &ColumnConfig, clock: Box<dyn Clock>) -> Result<Self, BuildError> {
        into_result(validate(config)).map_err(BuildError::InvalidConfiguration)?;
        let state = ColumnState::from_value(config.initial_value)?;

        Ok(Self {
            state,
            motion: MotionModel::new(&state, config.geometry(), config.springs()),
            appearance: config.appearance,
            target: None,
            clock,
            timer: FrameTimer::new(config.frame_rate, config.max_catch_up_frames),
            sinks: Vec::new(),
            history: ValueHistory::with_capacity(config.history_capacity),
        })
    }

    /// The digit currently shown.
    pub fn current_value(&self) -> u8 {
        self.state.current_value()
    }

    pub fn state(&self) -> &ColumnState {
        &self.state
    }

    pub fn beads(&self) -> &[Bead] {
        self.motion.beads()
    }

    pub fn geometry(&self) -> &ColumnGeometry {
        self.motion.geometry()
    }

    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    pub fn target(&self) -> Option<u8> {
        self.target
    }

    pub fn history(&self) -> &ValueHistory {
        &self.history
    }

    /// Register another receiver for column events.
    pub fn subscribe(&mut self, sink: impl EventSink + 'static) {
        self.subscribe_boxed(Box::new(sink));
    }

    pub(crate) fn subscribe_boxed(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// Set or clear the digit the value is checked against.
    pub fn set_target(&mut self, target: Option<u8>) -> Result<(), DomainError> {
        if let Some(digit) = target {
            check_digit(i64::from(digit))?;
        }
        self.target = target;
        Ok(())
    }

    /// Handle a click on `row` of `group`.
    ///
    /// Clicking the group's blank row is ignored and returns no events.
    /// Otherwise the blank moves there, every bead of the group takes the
    /// classified transition, and the emphasis, value and correctness events
    /// are returned and dispatched to every sink.
    pub fn on_user_select(
        &mut self,
        group: BeadGroup,
        row: usize,
    ) -> Result<Vec<ColumnEvent>, DomainError> {
        let before = self.state.current_value();
        let Some(change) = self.state.set_blank(group, row)? else {
            tracing::trace!(group = %group, row, "selection of blank row ignored");
            return Ok(Vec::new());
        };

        let classification = classify(change);
        self.motion.apply(&classification);

        let mut events = vec![ColumnEvent::from(classification)];
        let value = self.state.current_value();
        if value != before {
            self.record(before, value, ChangeCause::Selection);
            events.push(ColumnEvent::ValueChanged(value));
            if let Some(target) = self.target {
                events.push(if value == target {
                    ColumnEvent::Correct(value)
                } else {
                    ColumnEvent::Incorrect(value)
                });
            }
        }

        tracing::debug!(
            group = %group,
            old = change.old,
            new = change.new,
            transition = ?classification.transition,
            value,
            "selection accepted"
        );

        self.dispatch(&events);
        Ok(events)
    }

    /// Override the digit from outside.
    ///
    /// No transition is reclassified and no event is emitted; beads animate
    /// to the new layout with whatever spring they last used.
    pub fn set_value(&mut self, value: i64) -> Result<(), DomainError> {
        let before = self.state.current_value();
        self.state.apply_external_value(value)?;
        self.external_change(before);
        Ok(())
    }

    /// Show zero. Behaves like `set_value(0)` but cannot fail.
    pub fn reset_to_zero(&mut self) {
        let before = self.state.current_value();
        self.state = ColumnState::default();
        self.external_change(before);
    }

    /// Advance every bead by one frame and return the new poses.
    ///
    /// Never changes the digit; extra calls only continue convergence.
    pub fn tick(&mut self) -> ColumnFrame {
        let now = self.clock.now_millis();
        self.motion.step(&self.state, now);
        self.frame()
    }

    /// Advance by wall-clock time using fixed reference frames.
    ///
    /// Returns the number of frames run. Leftover time carries over to the
    /// next call.
    pub fn tick_elapsed(&mut self, elapsed: Duration) -> usize {
        let frames = self.timer.frames_for(elapsed);
        let now = self.clock.now_millis();
        for _ in 0..frames {
            self.motion.step(&self.state, now);
        }
        tracing::trace!(frames, ?elapsed, "elapsed tick");
        frames
    }

    /// Current poses without advancing.
    pub fn frame(&self) -> ColumnFrame {
        self.motion.frame(self.state.current_value())
    }

    /// Send the static layout to `renderer`.
    pub fn configure_renderer(&self, renderer: &mut dyn Renderer) {
        renderer.configure(self.motion.geometry(), &self.appearance);
    }

    /// Send the current poses to `renderer`.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        renderer.draw(&self.frame());
    }

    /// Whether every bead is within `epsilon` of its target and nearly still.
    pub fn is_settled(&self, epsilon: f64) -> bool {
        self.motion.is_settled(epsilon)
    }

    fn external_change(&mut self, before: u8) {
        let after = self.state.current_value();
        if after != before {
            self.record(before, after, ChangeCause::External);
            tracing::debug!(from = before, to = after, "value set externally");
        }
    }

    fn record(&mut self, from: u8, to: u8, cause: ChangeCause) {
        self.history.record(ValueChange {
            from,
            to,
            cause,
            timestamp: Utc::now(),
        });
    }

    fn dispatch(&mut self, events: &[ColumnEvent]) {
        for sink in &mut self.sinks {
            for event in events {
                sink.on_event(event);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ColumnBuilder;
    use crate::controller::EventLog;
    use crate::core::Transition;
    use crate::motion::ManualClock;

    fn column(value: i64) -> ColumnController {
        ColumnBuilder::new()
            .initial_value(value)
            .clock(ManualClock::new(0.0))
            .build()
            .unwrap()
    }

    fn transitions(column: &ColumnController, group: BeadGroup) -> Vec<Transition> {
        column
            .beads()
            .iter()
            .filter(|bead| bead.group() == group)
            .map(Bead::last_transition)
            .collect()
    }

    #[test]
    fn selecting_lower_row_seats_lower_beads() {
        let mut column = column(0);
        let events = column.on_user_select(BeadGroup::Lower, 3).unwrap();

        assert_eq!(column.current_value(), 3);
        assert_eq!(
            events,
            vec![
                ColumnEvent::Seated(BeadGroup::Lower),
                ColumnEvent::ValueChanged(3)
            ]
        );
        assert!(transitions(&column, BeadGroup::Lower)
            .iter()
            .all(|t| *t == Transition::Seating));
        assert_eq!(transitions(&column, BeadGroup::Upper), vec![Transition::None]);
    }

    #[test]
    fn upper_bead_seats_then_releases() {
        let mut column = column(3);

        column.on_user_select(BeadGroup::Upper, 0).unwrap();
        assert_eq!(column.current_value(), 8);
        assert_eq!(transitions(&column, BeadGroup::Upper), vec![Transition::Seating]);

        let events = column.on_user_select(BeadGroup::Upper, 1).unwrap();
        assert_eq!(column.current_value(), 3);
        assert_eq!(
            transitions(&column, BeadGroup::Upper),
            vec![Transition::Releasing]
        );
        assert_eq!(events[0], ColumnEvent::Moved(BeadGroup::Upper));
    }

    #[test]
    fn selecting_blank_row_changes_nothing() {
        let log = EventLog::new();
        let mut column = column(6);
        column.subscribe(log.clone());
        column.on_user_select(BeadGroup::Lower, 3).unwrap();
        log.drain();

        let before: Vec<_> = column.beads().iter().map(Bead::last_transition).collect();
        let events = column.on_user_select(BeadGroup::Lower, 3).unwrap();

        assert!(events.is_empty());
        assert!(log.events().is_empty());
        assert_eq!(column.current_value(), 8);
        let after: Vec<_> = column.beads().iter().map(Bead::last_transition).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn out_of_range_row_is_a_domain_error() {
        let mut column = column(0);
        let result = column.on_user_select(BeadGroup::Lower, 5);

        assert!(matches!(
            result,
            Err(DomainError::RowOutOfRange { row: 5, .. })
        ));
        assert_eq!(column.current_value(), 0);
    }

    #[test]
    fn target_adds_correctness_events() {
        let mut column = column(0);
        column.set_target(Some(7)).unwrap();

        let events = column.on_user_select(BeadGroup::Upper, 0).unwrap();
        assert_eq!(events.last(), Some(&ColumnEvent::Incorrect(5)));

        let events = column.on_user_select(BeadGroup::Lower, 2).unwrap();
        assert_eq!(events.last(), Some(&ColumnEvent::Correct(7)));
    }

    #[test]
    fn set_target_rejects_non_digits() {
        let mut column = column(0);
        assert!(column.set_target(Some(10)).is_err());
        assert_eq!(column.target(), None);
        column.set_target(Some(9)).unwrap();
        column.set_target(None).unwrap();
        assert_eq!(column.target(), None);
    }

    #[test]
    fn sinks_receive_returned_events() {
        let log = EventLog::new();
        let mut column = column(4);
        column.subscribe(log.clone());

        let events = column.on_user_select(BeadGroup::Lower, 1).unwrap();
        assert_eq!(log.events(), events);
        assert_eq!(events[0], ColumnEvent::Moved(BeadGroup::Lower));
    }

    #[test]
    fn set_value_keeps_transitions_and_emits_nothing() {
        let log = EventLog::new();
        let mut column = column(2);
        column.on_user_select(BeadGroup::Lower, 4).unwrap();
        column.subscribe(log.clone());

        let before: Vec<_> = column.beads().iter().map(Bead::last_transition).collect();
        column.set_value(7).unwrap();

        assert_eq!(column.current_value(), 7);
        assert!(log.events().is_empty());
        let after: Vec<_> = column.beads().iter().map(Bead::last_transition).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn set_value_rejects_non_digits() {
        let mut column = column(2);
        assert!(column.set_value(10).is_err());
        assert!(column.set_value(-1).is_err());
        assert_eq!(column.current_value(), 2);
    }

    #[test]
    fn reset_to_zero_matches_set_value_zero() {
        let log = EventLog::new();
        let mut column = column(9);
        column.on_user_select(BeadGroup::Lower, 2).unwrap();
        column.subscribe(log.clone());
        let before: Vec<_> = column.beads().iter().map(Bead::last_transition).collect();

        column.reset_to_zero();

        assert_eq!(column.current_value(), 0);
        assert_eq!(*column.state(), ColumnState::from_value(0).unwrap());
        assert!(log.events().is_empty());
        let after: Vec<_> = column.beads().iter().map(Bead::last_transition).collect();
        assert_eq!(before, after);

        let change = column.history().last().unwrap();
        assert_eq!((change.from, change.to, change.cause), (7, 0, ChangeCause::External));
    }

    #[test]
    fn reset_to_zero_at_zero_records_nothing() {
        let mut column = column(0);
        column.reset_to_zero();
        assert!(column.history().is_empty());
    }

    #[test]
    fn history_records_causes() {
        let mut column = column(0);
        column.on_user_select(BeadGroup::Lower, 3).unwrap();
        column.set_value(9).unwrap();
        column.set_value(9).unwrap();

        let causes: Vec<_> = column.history().changes().map(|c| c.cause).collect();
        assert_eq!(causes, vec![ChangeCause::Selection, ChangeCause::External]);
        assert_eq!(column.history().get_path(), vec![0, 3, 9]);
    }

    #[test]
    fn tick_never_changes_the_digit() {
        let mut column = column(0);
        column.on_user_select(BeadGroup::Upper, 0).unwrap();
        for _ in 0..50 {
            assert_eq!(column.tick().value, 5);
        }
        assert_eq!(column.current_value(), 5);
    }

    #[test]
    fn tick_converges_without_snapping() {
        let mut column = column(0);
        column.on_user_select(BeadGroup::Lower, 4).unwrap();

        column.tick();
        assert!(!column.is_settled(1.0));

        for _ in 0..600 {
            column.tick();
        }
        assert!(column.is_settled(1e-3));
    }

    #[test]
    fn tick_elapsed_runs_whole_frames() {
        let mut column = column(0);
        assert_eq!(column.tick_elapsed(Duration::from_millis(40)), 2);
        assert_eq!(column.tick_elapsed(Duration::from_millis(20)), 1);
        assert_eq!(column.tick_elapsed(Duration::ZERO), 0);
    }

    #[test]
    fn wobble_follows_the_clock() {
        let clock = ManualClock::new(0.0);
        let mut column = ColumnBuilder::new()
            .initial_value(0)
            .clock(clock.clone())
            .build()
            .unwrap();

        clock.set(100.0);
        let frame = column.tick();
        let upper = frame.beads[0];

        assert!(!upper.resting);
        assert_eq!(upper.scale_x, crate::motion::SQUASH_X);
        assert!((upper.rotation - (0.8f64).sin() * crate::motion::WOBBLE_AMPLITUDE).abs() < 1e-12);
    }
}
