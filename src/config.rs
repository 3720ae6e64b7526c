//! Tunable constants injected into the matrix and schedule stages.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{OptimizerError, Result};

/// Spherical Earth radius used by the haversine formula.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// City-driving speed assumption for travel time estimation.
pub const AVERAGE_SPEED_MPH: f64 = 25.0;

/// Fixed buffer added to every leg between two stops.
pub const INTER_STOP_BUFFER_MINUTES: u32 = 10;

/// Upper bound on full 2-opt sweeps.
pub const MAX_TWO_OPT_PASSES: usize = 1000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    pub earth_radius_miles: f64,
    pub average_speed_mph: f64,
    pub inter_stop_buffer_minutes: u32,
    /// Time the crew leaves for the first stop.
    #[serde(with = "crate::types::hhmm")]
    pub day_start: NaiveTime,
    /// Route position the nearest-neighbour construction starts from.
    pub start_index: usize,
    pub max_two_opt_passes: usize,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            earth_radius_miles: EARTH_RADIUS_MILES,
            average_speed_mph: AVERAGE_SPEED_MPH,
            inter_stop_buffer_minutes: INTER_STOP_BUFFER_MINUTES,
            day_start: NaiveTime::from_hms_opt(8, 0, 0).unwrap_or_default(),
            start_index: 0,
            max_two_opt_passes: MAX_TWO_OPT_PASSES,
        }
    }
}

impl OptimizerConfig {
    /// Sets the time the crew reaches the first stop.
    pub fn with_day_start(mut self, day_start: NaiveTime) -> Self {
        self.day_start = day_start;
        self
    }

    /// Sets the driving speed used for leg times.
    pub fn with_average_speed_mph(mut self, speed: f64) -> Self {
        self.average_speed_mph = speed;
        self
    }

    /// Sets the fixed buffer added to every leg.
    pub fn with_inter_stop_buffer_minutes(mut self, minutes: u32) -> Self {
        self.inter_stop_buffer_minutes = minutes;
        self
    }

    /// Sets the stop the single-crew construction starts from.
    pub fn with_start_index(mut self, start_index: usize) -> Self {
        self.start_index = start_index;
        self
    }

    /// Rejects non-finite or non-positive speed and radius.
    pub fn validate(&self) -> Result<()> {
        if !(self.average_speed_mph.is_finite() && self.average_speed_mph > 0.0) {
            return Err(OptimizerError::InvalidConfig {
                reason: format!("average speed must be positive, got {}", self.average_speed_mph),
            });
        }
        if !(self.earth_radius_miles.is_finite() && self.earth_radius_miles > 0.0) {
            return Err(OptimizerError::InvalidConfig {
                reason: format!("earth radius must be positive, got {}", self.earth_radius_miles),
            });
        }
        Ok(())
    }
}
