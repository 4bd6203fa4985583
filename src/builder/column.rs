//! Builder for constructing columns.

use crate::builder::error::BuildError;
use crate::config::{Appearance, ColumnConfig};
use crate::controller::{ColumnController, EventSink};
use crate::motion::{Clock, SpringParams, SystemClock};

/// Builder for constructing columns with a fluent API.
///
/// Every setting has a default; `build` validates the whole configuration
/// at once.
pub struct ColumnBuilder {
    config: ColumnConfig,
    target: Option<u8>,
    clock: Option<Box<dyn Clock>>,
    sinks: Vec<Box<dyn EventSink>>,
}

impl ColumnBuilder {
    /// Create a new builder with the stock configuration.
    pub fn new() -> Self {
        Self {
            config: ColumnConfig::default(),
            target: None,
            clock: None,
            sinks: Vec::new(),
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: ColumnConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the digit shown at start.
    pub fn initial_value(mut self, value: i64) -> Self {
        self.config.initial_value = value;
        self
    }

    /// Set column width and group heights.
    pub fn dimensions(mut self, width: f64, upper_height: f64, lower_height: f64) -> Self {
        self.config.width = width;
        self.config.upper_height = upper_height;
        self.config.lower_height = lower_height;
        self
    }

    pub fn seating_spring(mut self, params: SpringParams) -> Self {
        self.config.seating_spring = params;
        self
    }

    pub fn releasing_spring(mut self, params: SpringParams) -> Self {
        self.config.releasing_spring = params;
        self
    }

    pub fn appearance(mut self, appearance: Appearance) -> Self {
        self.config.appearance = appearance;
        self
    }

    /// Check every change against `target`.
    pub fn target(mut self, target: u8) -> Self {
        self.target = Some(target);
        self
    }

    /// Drive the wobble from `clock` instead of the wall clock.
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Add an event receiver.
    pub fn sink(mut self, sink: impl EventSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    /// Build the column.
    pub fn build(self) -> Result<ColumnController, BuildError> {
        let clock = self.clock.unwrap_or_else(|| Box::new(SystemClock));
        let mut column = ColumnController::with_clock(&self.config, clock)?;

        column.set_target(self.target)?;
        for sink in self.sinks {
            column.subscribe_boxed(sink);
        }

        Ok(column)
    }
}

impl Default for ColumnBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{ColumnEvent, EventLog};
    use crate::core::BeadGroup;
    use crate::error::{ConfigurationError, DomainError};

    #[test]
    fn builder_uses_defaults() {
        let column = ColumnBuilder::new().build().unwrap();
        assert_eq!(column.current_value(), 0);
        assert_eq!(column.target(), None);
        assert_eq!(column.geometry().width, 120.0);
    }

    #[test]
    fn builder_rejects_out_of_range_initial_value() {
        for value in [10, -1] {
            let result = ColumnBuilder::new().initial_value(value).build();
            assert_eq!(
                result.unwrap_err(),
                BuildError::Domain(DomainError::DigitOutOfRange { value })
            );
        }
    }

    #[test]
    fn builder_rejects_out_of_range_target() {
        let result = ColumnBuilder::new().target(12).build();
        assert!(matches!(result, Err(BuildError::Domain(_))));
    }

    #[test]
    fn builder_reports_every_configuration_problem() {
        let result = ColumnBuilder::new()
            .dimensions(0.0, 100.0, -250.0)
            .seating_spring(SpringParams::new(0.18, 1.2))
            .build();

        match result {
            Err(BuildError::InvalidConfiguration(errors)) => {
                assert_eq!(errors.len(), 3);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigurationError::InvalidSpring { name: "seating", .. })));
            }
            other => panic!("Expected configuration errors, got {other:?}"),
        }
    }

    #[test]
    fn fluent_api_wires_target_and_sinks() {
        let log = EventLog::new();
        let mut column = ColumnBuilder::new()
            .initial_value(4)
            .target(5)
            .sink(log.clone())
            .build()
            .unwrap();

        column.on_user_select(BeadGroup::Upper, 0).unwrap();

        assert_eq!(
            log.events(),
            vec![
                ColumnEvent::Seated(BeadGroup::Upper),
                ColumnEvent::ValueChanged(9),
                ColumnEvent::Incorrect(9),
            ]
        );
    }

    #[test]
    fn appearance_is_passed_through() {
        let appearance = Appearance {
            beam_color: 0xffd700,
            show_teiiten: true,
            ..Appearance::default()
        };
        let column = ColumnBuilder::new().appearance(appearance).build().unwrap();
        assert_eq!(column.appearance(), &appearance);
    }
}
