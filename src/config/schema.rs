//! Construction configuration of a column.

use crate::core::DEFAULT_HISTORY_CAPACITY;
use crate::motion::{ColumnGeometry, SpringParams, SpringSet};
use serde::{Deserialize, Serialize};

/// Colours and decorations passed through to renderers.
///
/// Nothing in the engine branches on these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Appearance {
    pub bead_color_upper: u32,
    pub bead_color_lower: u32,
    pub beam_color: u32,
    /// Outline of seated beads; falls back to `beam_color`.
    pub outline_color: Option<u32>,
    /// Draw the unit-point dot on the rail.
    pub show_teiiten: bool,
    pub show_cell_border: bool,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            bead_color_upper: 0xef4444,
            bead_color_lower: 0xef4444,
            beam_color: 0x2d3748,
            outline_color: None,
            show_teiiten: false,
            show_cell_border: false,
        }
    }
}

impl Appearance {
    pub fn outline_color(&self) -> u32 {
        self.outline_color.unwrap_or(self.beam_color)
    }
}

/// Everything needed to build a column.
///
/// Every field has a default, so a partial JSON document is enough:
///
/// ```rust
/// use beadboost::config::ColumnConfig;
///
/// let config = ColumnConfig::from_json(r#"{ "initial_value": 4, "width": 100 }"#).unwrap();
/// assert_eq!(config.initial_value, 4);
/// assert_eq!(config.upper_height, 100.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnConfig {
    pub width: f64,
    pub upper_height: f64,
    pub lower_height: f64,
    /// Signed so that out-of-range input reaches the digit check.
    pub initial_value: i64,
    pub seating_spring: SpringParams,
    pub releasing_spring: SpringParams,
    /// Reference frames per second for elapsed-time ticks.
    pub frame_rate: f64,
    pub max_catch_up_frames: usize,
    pub history_capacity: usize,
    pub appearance: Appearance,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        let springs = SpringSet::default();
        Self {
            width: 120.0,
            upper_height: 100.0,
            lower_height: 250.0,
            initial_value: 0,
            seating_spring: springs.seating,
            releasing_spring: springs.releasing,
            frame_rate: 60.0,
            max_catch_up_frames: 8,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            appearance: Appearance::default(),
        }
    }
}

impl ColumnConfig {
    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn geometry(&self) -> ColumnGeometry {
        ColumnGeometry::new(self.width, self.upper_height, self.lower_height)
    }

    pub fn springs(&self) -> SpringSet {
        SpringSet {
            seating: self.seating_spring,
            releasing: self.releasing_spring,
        }
    }
}
