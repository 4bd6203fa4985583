//! Continuous animation of bead columns.
//!
//! Every bead chases the row its column's discrete state implies, using a
//! discrete spring whose parameters depend on the bead's last transition.
//! Beads that are not resting on the rail also squash and wobble.

mod bead;
mod clock;
mod layout;
mod model;
mod spring;

pub use bead::{
    Bead, BeadPose, Deformation, SQUASH_X, SQUASH_Y, WOBBLE_AMPLITUDE, WOBBLE_PHASE_STEP,
    WOBBLE_RATE,
};
pub use clock::{Clock, ManualClock, SystemClock};
pub use layout::{ColumnGeometry, MIN_RAIL_HEIGHT, RAIL_TO_UPPER_ROW};
pub use model::{ColumnFrame, FrameTimer, MotionModel};
pub use spring::{SpringParams, SpringSet};
