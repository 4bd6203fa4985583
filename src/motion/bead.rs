//! Continuous state of a single bead.

use super::layout::ColumnGeometry;
use super::spring::SpringSet;
use crate::core::{BeadGroup, Transition};
use serde::{Deserialize, Serialize};

/// Horizontal stretch of a bead in flight.
pub const SQUASH_X: f64 = 1.1;

/// Vertical squash of a bead in flight.
pub const SQUASH_Y: f64 = 0.9;

/// Angular frequency of the wobble, in radians per millisecond.
pub const WOBBLE_RATE: f64 = 0.008;

/// Peak wobble rotation, in radians.
pub const WOBBLE_AMPLITUDE: f64 = 0.08;

/// Wobble phase offset between neighbouring beads of a group.
pub const WOBBLE_PHASE_STEP: f64 = 0.5;

/// Cosmetic squash/stretch and rotation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Deformation {
    pub scale_x: f64,
    pub scale_y: f64,
    pub rotation: f64,
}

impl Deformation {
    pub const NEUTRAL: Self = Self {
        scale_x: 1.0,
        scale_y: 1.0,
        rotation: 0.0,
    };

    /// Squashed, wobbling shape of bead `index` at time `t_ms`.
    pub fn in_flight(t_ms: f64, index: usize) -> Self {
        let phase = index as f64 * WOBBLE_PHASE_STEP;
        Self {
            scale_x: SQUASH_X,
            scale_y: SQUASH_Y,
            rotation: (t_ms * WOBBLE_RATE + phase).sin() * WOBBLE_AMPLITUDE,
        }
    }
}

impl Default for Deformation {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Everything a renderer needs to draw one bead for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BeadPose {
    pub group: BeadGroup,
    /// Position of the bead within its group, top to bottom.
    pub index: usize,
    pub position: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub rotation: f64,
    /// Whether the bead belongs to the stack touching the rail.
    pub resting: bool,
}

/// One bead: a spring-driven position plus its sticky transition.
#[derive(Clone, Debug, PartialEq)]
pub struct Bead {
    group: BeadGroup,
    index: usize,
    position: f64,
    velocity: f64,
    last_transition: Transition,
    target_row: usize,
    target_position: f64,
    resting: bool,
    deformation: Deformation,
}

impl Bead {
    /// Place a bead at rest on `row`.
    pub fn at_rest(
        group: BeadGroup,
        index: usize,
        row: usize,
        resting: bool,
        geometry: &ColumnGeometry,
    ) -> Self {
        let position = geometry.row_center(group, row);
        Self {
            group,
            index,
            position,
            velocity: 0.0,
            last_transition: Transition::None,
            target_row: row,
            target_position: position,
            resting,
            deformation: Deformation::NEUTRAL,
        }
    }

    pub fn group(&self) -> BeadGroup {
        self.group
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn last_transition(&self) -> Transition {
        self.last_transition
    }

    pub fn target_row(&self) -> usize {
        self.target_row
    }

    pub fn target_position(&self) -> f64 {
        self.target_position
    }

    pub fn is_resting(&self) -> bool {
        self.resting
    }

    pub fn deformation(&self) -> Deformation {
        self.deformation
    }

    pub(crate) fn set_transition(&mut self, transition: Transition) {
        self.last_transition = transition;
    }

    /// Advance one frame toward `target_row`.
    ///
    /// The spring is picked from the sticky transition; the deformation is
    /// picked from `resting`, which callers derive from the current layout.
    pub fn advance(
        &mut self,
        target_row: usize,
        resting: bool,
        geometry: &ColumnGeometry,
        springs: &SpringSet,
        t_ms: f64,
    ) {
        self.target_row = target_row;
        self.target_position = geometry.row_center(self.group, target_row);
        self.resting = resting;

        let params = springs.for_transition(self.last_transition);
        (self.position, self.velocity) =
            params.step(self.position, self.velocity, self.target_position);

        self.deformation = if resting {
            Deformation::NEUTRAL
        } else {
            Deformation::in_flight(t_ms, self.index)
        };
    }

    /// Whether the bead is within `epsilon` of its target and nearly still.
    pub fn is_settled(&self, epsilon: f64) -> bool {
        (self.target_position - self.position).abs() < epsilon && self.velocity.abs() < epsilon
    }

    pub fn pose(&self) -> BeadPose {
        BeadPose {
            group: self.group,
            index: self.index,
            position: self.position,
            scale_x: self.deformation.scale_x,
            scale_y: self.deformation.scale_y,
            rotation: self.deformation.rotation,
            resting: self.resting,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> ColumnGeometry {
        ColumnGeometry::new(120.0, 100.0, 250.0)
    }

    #[test]
    fn at_rest_sits_on_row_center() {
        let bead = Bead::at_rest(BeadGroup::Lower, 2, 3, false, &geometry());
        assert_eq!(bead.position(), 305.0);
        assert_eq!(bead.velocity(), 0.0);
        assert_eq!(bead.last_transition(), Transition::None);
        assert!(bead.is_settled(1e-9));
    }

    #[test]
    fn advance_moves_toward_new_row() {
        let g = geometry();
        let mut bead = Bead::at_rest(BeadGroup::Upper, 0, 0, false, &g);
        bead.set_transition(Transition::Seating);
        bead.advance(1, true, &g, &SpringSet::default(), 0.0);

        // 50px of travel at stiffness 0.18
        assert!((bead.position() - 34.0).abs() < 1e-9);
        assert!(bead.velocity() > 0.0);
        assert_eq!(bead.target_row(), 1);
        assert!(!bead.is_settled(1.0));
    }

    #[test]
    fn releasing_uses_softer_spring() {
        let g = geometry();
        let springs = SpringSet::default();
        let mut seating = Bead::at_rest(BeadGroup::Upper, 0, 1, true, &g);
        let mut releasing = seating.clone();
        seating.set_transition(Transition::Seating);
        releasing.set_transition(Transition::Releasing);

        seating.advance(0, false, &g, &springs, 0.0);
        releasing.advance(0, false, &g, &springs, 0.0);

        assert!(releasing.velocity().abs() < seating.velocity().abs());
    }

    #[test]
    fn deformation_only_in_flight() {
        let g = geometry();
        let springs = SpringSet::default();
        let mut bead = Bead::at_rest(BeadGroup::Lower, 1, 1, true, &g);

        bead.advance(1, true, &g, &springs, 500.0);
        assert_eq!(bead.deformation(), Deformation::NEUTRAL);

        bead.advance(2, false, &g, &springs, 500.0);
        let shape = bead.deformation();
        assert_eq!(shape.scale_x, SQUASH_X);
        assert_eq!(shape.scale_y, SQUASH_Y);
        assert!(shape.rotation.abs() <= WOBBLE_AMPLITUDE);
    }

    #[test]
    fn wobble_phase_depends_on_index() {
        let first = Deformation::in_flight(0.0, 0);
        let second = Deformation::in_flight(0.0, 1);
        assert_eq!(first.rotation, 0.0);
        assert!((second.rotation - 0.5f64.sin() * WOBBLE_AMPLITUDE).abs() < 1e-12);
    }

    #[test]
    fn pose_mirrors_bead() {
        let g = geometry();
        let bead = Bead::at_rest(BeadGroup::Lower, 0, 0, true, &g);
        let pose = bead.pose();
        assert_eq!(pose.group, BeadGroup::Lower);
        assert_eq!(pose.position, bead.position());
        assert!(pose.resting);
        assert_eq!(pose.scale_x, 1.0);
    }
}
