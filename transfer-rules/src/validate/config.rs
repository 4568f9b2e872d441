//! Validation thresholds.

use chrono::Duration;

/// Error returned when a set of thresholds is inconsistent.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A warning threshold is not below its error threshold
    #[error("{warning} threshold ({warning_value}) must be below {error} threshold ({error_value})")]
    ThresholdOrder {
        warning: &'static str,
        warning_value: f64,
        error: &'static str,
        error_value: f64,
    },

    /// A value that must be positive is not
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    /// A value that must not be negative is
    #[error("{field} cannot be negative, got {value}")]
    Negative { field: &'static str, value: i64 },
}

/// Thresholds used when classifying transfer rules.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationConfig {
    /// Timing fields at or above this many seconds get a warning.
    pub large_time_warning_secs: i64,

    /// Timing fields at or above this many seconds are an error.
    pub implausible_time_secs: i64,

    /// Stops further apart than this (meters) get a warning.
    pub distance_warning_meters: f64,

    /// Stops further apart than this (meters) are an error.
    pub distance_error_meters: f64,

    /// Speed of a fast walker, in meters per second.
    pub fast_walking_speed_mps: f64,

    /// Slack added to `min_transfer_time` before comparing it to the
    /// time a fast walker needs (seconds).
    pub walking_buffer_secs: i64,
}

impl ValidationConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        large_time_warning_secs: i64,
        implausible_time_secs: i64,
        distance_warning_meters: f64,
        distance_error_meters: f64,
        fast_walking_speed_mps: f64,
        walking_buffer_secs: i64,
    ) -> Self {
        Self {
            large_time_warning_secs,
            implausible_time_secs,
            distance_warning_meters,
            distance_error_meters,
            fast_walking_speed_mps,
            walking_buffer_secs,
        }
    }

    /// Check that the thresholds make sense together.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.large_time_warning_secs < 0 {
            return Err(ConfigError::Negative {
                field: "large_time_warning_secs",
                value: self.large_time_warning_secs,
            });
        }
        if self.large_time_warning_secs >= self.implausible_time_secs {
            return Err(ConfigError::ThresholdOrder {
                warning: "large_time_warning_secs",
                warning_value: self.large_time_warning_secs as f64,
                error: "implausible_time_secs",
                error_value: self.implausible_time_secs as f64,
            });
        }
        if !(self.distance_warning_meters > 0.0) {
            return Err(ConfigError::NotPositive {
                field: "distance_warning_meters",
                value: self.distance_warning_meters,
            });
        }
        // Also rejects a NaN error threshold.
        if !(self.distance_warning_meters < self.distance_error_meters) {
            return Err(ConfigError::ThresholdOrder {
                warning: "distance_warning_meters",
                warning_value: self.distance_warning_meters,
                error: "distance_error_meters",
                error_value: self.distance_error_meters,
            });
        }
        if !(self.fast_walking_speed_mps > 0.0) || self.fast_walking_speed_mps.is_infinite() {
            return Err(ConfigError::NotPositive {
                field: "fast_walking_speed_mps",
                value: self.fast_walking_speed_mps,
            });
        }
        if self.walking_buffer_secs < 0 {
            return Err(ConfigError::Negative {
                field: "walking_buffer_secs",
                value: self.walking_buffer_secs,
            });
        }
        Ok(())
    }

    /// Returns the large-time warning threshold as a Duration.
    pub fn large_time_warning(&self) -> Duration {
        Duration::seconds(self.large_time_warning_secs)
    }

    /// Returns the implausible-time error threshold as a Duration.
    pub fn implausible_time(&self) -> Duration {
        Duration::seconds(self.implausible_time_secs)
    }

    /// Returns the walking buffer as a Duration.
    pub fn walking_buffer(&self) -> Duration {
        Duration::seconds(self.walking_buffer_secs)
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            large_time_warning_secs: 3 * 3600,
            implausible_time_secs: 24 * 3600,
            distance_warning_meters: 200.0,
            distance_error_meters: 1000.0,
            fast_walking_speed_mps: 2.0,
            walking_buffer_secs: 120,
        }
    }
}
