//! Configuration checks using Validation.
//!
//! Every check runs, and every violation is reported together, so a host
//! fixing a bad config sees all of its problems in one pass.

use super::schema::ColumnConfig;
use crate::error::ConfigurationError;
use crate::core::MAX_HISTORY_CAPACITY;
use crate::motion::SpringParams;
use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of a single check or of the whole config.
pub type ConfigValidation = Validation<(), NonEmptyVec<ConfigurationError>>;

fn positive(field: &'static str, value: f64) -> ConfigValidation {
    if value.is_finite() && value > 0.0 {
        Validation::success(())
    } else {
        Validation::fail(ConfigurationError::NonPositiveDimension { field, value })
    }
}

fn stable_spring(name: &'static str, params: SpringParams) -> ConfigValidation {
    if params.is_stable() {
        Validation::success(())
    } else {
        Validation::fail(ConfigurationError::InvalidSpring {
            name,
            stiffness: params.stiffness,
            damping: params.damping,
        })
    }
}

/// The frame period `1 / value` must be a non-zero `Duration`.
fn frame_rate(value: f64) -> ConfigValidation {
    let period = Duration::try_from_secs_f64(1.0 / value);
    if value.is_finite() && value > 0.0 && period.is_ok_and(|period| !period.is_zero()) {
        Validation::success(())
    } else {
        Validation::fail(ConfigurationError::InvalidFrameRate { value })
    }
}

fn history_capacity(capacity: usize) -> ConfigValidation {
    if capacity <= MAX_HISTORY_CAPACITY {
        Validation::success(())
    } else {
        Validation::fail(ConfigurationError::HistoryTooLarge {
            capacity,
            max: MAX_HISTORY_CAPACITY,
        })
    }
}

fn catch_up(frames: usize) -> ConfigValidation {
    if frames > 0 {
        Validation::success(())
    } else {
        Validation::fail(ConfigurationError::NoCatchUpFrames)
    }
}

/// Run every structural check on `config`.
///
/// The digit in `initial_value` is not checked here; it is a domain error,
/// reported separately by the builder.
pub fn validate(config: &ColumnConfig) -> ConfigValidation {
    let checks = vec![
        positive("width", config.width),
        positive("upper_height", config.upper_height),
        positive("lower_height", config.lower_height),
        stable_spring("seating", config.seating_spring),
        stable_spring("releasing", config.releasing_spring),
        frame_rate(config.frame_rate),
        catch_up(config.max_catch_up_frames),
        history_capacity(config.history_capacity),
    ];

    Validation::all_vec(checks).map(|_| ())
}

/// Flatten a validation outcome into a `Result`.
pub fn into_result(validation: ConfigValidation) -> Result<(), Vec<ConfigurationError>> {
    match validation {
        Validation::Success(()) => Ok(()),
        Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
    }
}
