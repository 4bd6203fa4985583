//! Motion model of a whole column.

use super::bead::{Bead, BeadPose};
use super::layout::ColumnGeometry;
use super::spring::SpringSet;
use crate::core::{BeadGroup, Classification, ColumnState};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Every bead pose of a column for one frame, upper bead first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColumnFrame {
    pub value: u8,
    pub beads: Vec<BeadPose>,
}

impl ColumnFrame {
    /// Poses of one group, top to bottom.
    pub fn group(&self, group: BeadGroup) -> impl Iterator<Item = &BeadPose> {
        self.beads.iter().filter(move |pose| pose.group == group)
    }
}

/// Target row of every bead for a given discrete state.
///
/// Lower beads take the non-blank rows in sorted order, so bead `i` always
/// sits on the `i`-th occupied row and beads never cross each other.
fn target_rows(state: &ColumnState) -> Vec<(BeadGroup, usize)> {
    [BeadGroup::Upper, BeadGroup::Lower]
        .into_iter()
        .flat_map(|group| {
            state
                .occupied_rows(group)
                .into_iter()
                .map(move |row| (group, row))
        })
        .collect()
}

/// Springs for every bead of one column.
///
/// The bead list is fixed-size: one upper bead followed by the lower beads.
#[derive(Clone, Debug)]
pub struct MotionModel {
    beads: Vec<Bead>,
    geometry: ColumnGeometry,
    springs: SpringSet,
}

impl MotionModel {
    /// Place every bead at rest on the rows `state` implies.
    pub fn new(state: &ColumnState, geometry: ColumnGeometry, springs: SpringSet) -> Self {
        let mut next_index = [0usize; 2];
        let beads = target_rows(state)
            .into_iter()
            .map(|(group, row)| {
                let slot = &mut next_index[group as usize];
                let index = *slot;
                *slot += 1;
                Bead::at_rest(group, index, row, state.is_resting(group, row), &geometry)
            })
            .collect();

        Self {
            beads,
            geometry,
            springs,
        }
    }

    pub fn beads(&self) -> &[Bead] {
        &self.beads
    }

    pub fn geometry(&self) -> &ColumnGeometry {
        &self.geometry
    }

    pub fn springs(&self) -> &SpringSet {
        &self.springs
    }

    /// Stamp a classified change onto every bead of its group.
    pub fn apply(&mut self, classification: &Classification) {
        self.beads
            .iter_mut()
            .filter(|bead| bead.group() == classification.group)
            .for_each(|bead| bead.set_transition(classification.transition));
    }

    /// Integrate one frame.
    ///
    /// All targets come from the same snapshot of `state`, computed before
    /// any bead moves.
    pub fn step(&mut self, state: &ColumnState, t_ms: f64) {
        let targets = target_rows(state);
        debug_assert_eq!(targets.len(), self.beads.len());

        for (bead, (group, row)) in self.beads.iter_mut().zip(targets) {
            debug_assert_eq!(bead.group(), group);
            let resting = state.is_resting(group, row);
            bead.advance(row, resting, &self.geometry, &self.springs, t_ms);
        }
    }

    /// Whether every bead is within `epsilon` of its target and nearly still.
    pub fn is_settled(&self, epsilon: f64) -> bool {
        self.beads.iter().all(|bead| bead.is_settled(epsilon))
    }

    pub fn frame(&self, value: u8) -> ColumnFrame {
        ColumnFrame {
            value,
            beads: self.beads.iter().map(Bead::pose).collect(),
        }
    }
}

/// Fixed-timestep accumulator turning wall-clock time into frames.
#[derive(Clone, Debug)]
pub struct FrameTimer {
    frame: Duration,
    max_catch_up: usize,
    accumulated: Duration,
}

impl FrameTimer {
    /// `frame_rate` frames per second, running at most `max_catch_up`
    /// frames per call. Callers validate both.
    pub fn new(frame_rate: f64, max_catch_up: usize) -> Self {
        Self {
            frame: Duration::from_secs_f64(1.0 / frame_rate),
            max_catch_up,
            accumulated: Duration::ZERO,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Add `elapsed` and return how many whole frames are due.
    ///
    /// Time beyond the catch-up limit is dropped rather than carried.
    pub fn frames_for(&mut self, elapsed: Duration) -> usize {
        self.accumulated += elapsed;

        let mut frames = 0;
        while self.accumulated >= self.frame && frames < self.max_catch_up {
            self.accumulated -= self.frame;
            frames += 1;
        }
        if frames == self.max_catch_up && self.accumulated >= self.frame {
            self.accumulated = Duration::ZERO;
        }
        frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{classify, Transition};

    fn model(value: i64) -> (ColumnState, MotionModel) {
        let state = ColumnState::from_value(value).unwrap();
        let geometry = ColumnGeometry::new(120.0, 100.0, 250.0);
        (state, MotionModel::new(&state, geometry, SpringSet::default()))
    }

    #[test]
    fn new_places_beads_on_their_rows() {
        let (_, model) = model(7);
        let rows: Vec<_> = model.beads().iter().map(Bead::target_row).collect();
        assert_eq!(rows, vec![1, 0, 1, 3, 4]);

        let indices: Vec<_> = model.beads().iter().map(Bead::index).collect();
        assert_eq!(indices, vec![0, 0, 1, 2, 3]);
        assert!(model.is_settled(1e-9));
    }

    #[test]
    fn apply_marks_only_the_changed_group() {
        let (mut state, mut model) = model(0);
        let change = state.set_blank(BeadGroup::Lower, 3).unwrap().unwrap();
        model.apply(&classify(change));

        let transitions: Vec<_> = model.beads().iter().map(Bead::last_transition).collect();
        assert_eq!(transitions[0], Transition::None);
        assert!(transitions[1..].iter().all(|t| *t == Transition::Seating));
    }

    #[test]
    fn step_targets_sorted_occupied_rows() {
        let (mut state, mut model) = model(0);
        state.set_blank(BeadGroup::Lower, 2).unwrap();
        model.step(&state, 0.0);

        let rows: Vec<_> = model.beads()[1..].iter().map(Bead::target_row).collect();
        assert_eq!(rows, vec![0, 1, 3, 4]);
        let resting: Vec<_> = model.beads()[1..].iter().map(Bead::is_resting).collect();
        assert_eq!(resting, vec![true, true, false, false]);
    }

    #[test]
    fn frame_lists_upper_bead_first() {
        let (_, model) = model(5);
        let frame = model.frame(5);
        assert_eq!(frame.value, 5);
        assert_eq!(frame.beads.len(), 5);
        assert_eq!(frame.beads[0].group, BeadGroup::Upper);
        assert_eq!(frame.group(BeadGroup::Lower).count(), 4);
    }

    #[test]
    fn frame_timer_carries_remainder() {
        let mut timer = FrameTimer::new(100.0, 8);
        assert_eq!(timer.frames_for(Duration::from_millis(15)), 1);
        assert_eq!(timer.frames_for(Duration::from_millis(5)), 1);
        assert_eq!(timer.frames_for(Duration::from_millis(9)), 0);
    }

    #[test]
    fn frame_timer_caps_catch_up() {
        let mut timer = FrameTimer::new(100.0, 3);
        assert_eq!(timer.frames_for(Duration::from_secs(1)), 3);
        // the backlog is dropped, not replayed
        assert_eq!(timer.frames_for(Duration::ZERO), 0);
    }
}
