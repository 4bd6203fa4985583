//! Discrete spring-damper used to animate beads.
//!
//! The model is a stylized per-frame step, not a physical solver:
//!
//! ```text
//! velocity = velocity * damping + (target - position) * stiffness
//! position = position + velocity
//! ```
//!
//! It is stable for `stiffness > 0` and `0 < damping < 1`, converging
//! asymptotically without ever landing bit-exactly on the target.

use crate::core::Transition;
use serde::{Deserialize, Serialize};

/// One stiffness/damping pair.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpringParams {
    pub stiffness: f64,
    pub damping: f64,
}

impl SpringParams {
    /// Crisp snap with a brief overshoot, used when beads seat on the rail.
    pub const SEATING: Self = Self {
        stiffness: 0.18,
        damping: 0.78,
    };

    /// Slow, smooth detachment, used when beads leave the rail.
    pub const RELEASING: Self = Self {
        stiffness: 0.05,
        damping: 0.50,
    };

    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
        }
    }

    /// Whether the step converges for these parameters.
    pub fn is_stable(&self) -> bool {
        self.stiffness.is_finite()
            && self.stiffness > 0.0
            && self.damping.is_finite()
            && self.damping > 0.0
            && self.damping < 1.0
    }

    /// Advance one frame toward `target` (semi-implicit Euler).
    pub fn step(&self, position: f64, velocity: f64, target: f64) -> (f64, f64) {
        let velocity = velocity * self.damping + (target - position) * self.stiffness;
        (position + velocity, velocity)
    }
}

/// The two parameter sets a column switches between.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpringSet {
    pub seating: SpringParams,
    pub releasing: SpringParams,
}

impl Default for SpringSet {
    fn default() -> Self {
        Self {
            seating: SpringParams::SEATING,
            releasing: SpringParams::RELEASING,
        }
    }
}

impl SpringSet {
    /// Parameters for a bead's last transition.
    ///
    /// Beads that have not moved yet use the seating set.
    pub fn for_transition(&self, transition: Transition) -> SpringParams {
        match transition {
            Transition::Releasing => self.releasing,
            Transition::Seating | Transition::None => self.seating,
        }
    }
}
