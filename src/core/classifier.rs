//! Transition classification for accepted blank moves.
//!
//! A click never says which beads moved; it only moves a blank. Because the
//! beads of a group always fill every non-blank row, the direction the blank
//! travels is enough to tell whether the beads went toward or away from the
//! rail.

use super::state::{BeadGroup, BlankChange};
use serde::{Deserialize, Serialize};

/// Most recent motion kind of a bead.
///
/// Sticky: a bead keeps its transition across frames until the next accepted
/// change in its group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transition {
    /// Moving onto the rail.
    Seating,
    /// Moving off the rail.
    Releasing,
    /// No change seen yet.
    #[default]
    None,
}

/// Feedback cue attached to a classified change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Emphasis {
    /// Beads snapped onto the rail.
    Stick,
    /// Beads moved without reaching the rail.
    Move,
}

/// Outcome of classifying one [`BlankChange`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Group whose beads all take `transition`.
    pub group: BeadGroup,
    pub transition: Transition,
    pub emphasis: Emphasis,
}

/// Classify a blank move.
///
/// # Example
///
/// ```rust
/// use beadboost::core::{classify, BeadGroup, BlankChange, Transition};
///
/// // lower blank 0 -> 3: three beads slide up onto the rail
/// let outcome = classify(BlankChange { group: BeadGroup::Lower, old: 0, new: 3 });
/// assert_eq!(outcome.transition, Transition::Seating);
/// ```
pub fn classify(change: BlankChange) -> Classification {
    let seating = match change.group {
        // the rail is below the upper group: the blank rising means the bead sank
        BeadGroup::Upper => change.old > change.new,
        // the rail is above the lower group: the blank sinking means beads rose
        BeadGroup::Lower => change.old < change.new,
    };

    let (transition, emphasis) = if seating {
        (Transition::Seating, Emphasis::Stick)
    } else {
        (Transition::Releasing, Emphasis::Move)
    };

    Classification {
        group: change.group,
        transition,
        emphasis,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(group: BeadGroup, old: usize, new: usize) -> BlankChange {
        BlankChange { group, old, new }
    }

    #[test]
    fn upper_bead_seats_when_blank_moves_up() {
        let outcome = classify(change(BeadGroup::Upper, 1, 0));
        assert_eq!(outcome.transition, Transition::Seating);
        assert_eq!(outcome.emphasis, Emphasis::Stick);
    }

    #[test]
    fn upper_bead_releases_when_blank_moves_down() {
        let outcome = classify(change(BeadGroup::Upper, 0, 1));
        assert_eq!(outcome.transition, Transition::Releasing);
        assert_eq!(outcome.emphasis, Emphasis::Move);
    }

    #[test]
    fn lower_beads_seat_when_blank_moves_down() {
        for (old, new) in [(0, 1), (0, 4), (2, 3)] {
            let outcome = classify(change(BeadGroup::Lower, old, new));
            assert_eq!(outcome.transition, Transition::Seating, "{old} -> {new}");
        }
    }

    #[test]
    fn lower_beads_release_when_blank_moves_up() {
        for (old, new) in [(4, 0), (3, 2), (1, 0)] {
            let outcome = classify(change(BeadGroup::Lower, old, new));
            assert_eq!(outcome.transition, Transition::Releasing, "{old} -> {new}");
            assert_eq!(outcome.emphasis, Emphasis::Move);
        }
    }

    #[test]
    fn classification_keeps_group() {
        assert_eq!(classify(change(BeadGroup::Lower, 0, 2)).group, BeadGroup::Lower);
        assert_eq!(classify(change(BeadGroup::Upper, 1, 0)).group, BeadGroup::Upper);
    }

    #[test]
    fn default_transition_is_none() {
        assert_eq!(Transition::default(), Transition::None);
    }
}
