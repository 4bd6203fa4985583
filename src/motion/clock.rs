//! Time sources for the cosmetic wobble of beads in flight.

use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Milliseconds on some monotonic-enough timeline.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> f64;
}

/// Wall clock backed by `chrono::Utc`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> f64 {
        Utc::now().timestamp_millis() as f64
    }
}

/// Settable clock for deterministic hosts and tests.
///
/// Clones share the same reading, so a handle kept outside a column can
/// drive the clock the column owns.
///
/// # Example
///
/// ```rust
/// use beadboost::motion::{Clock, ManualClock};
///
/// let clock = ManualClock::new(0.0);
/// let handle = clock.clone();
/// handle.advance(16.0);
/// assert_eq!(clock.now_millis(), 16.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    millis: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new(millis: f64) -> Self {
        Self {
            millis: Arc::new(AtomicU64::new(millis.to_bits())),
        }
    }

    pub fn set(&self, millis: f64) {
        self.millis.store(millis.to_bits(), Ordering::Relaxed);
    }

    pub fn advance(&self, millis: f64) {
        self.set(self.now_millis() + millis);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> f64 {
        f64::from_bits(self.millis.load(Ordering::Relaxed))
    }
}
