//! Diagnostic values.

use std::fmt;

use serde::Serialize;

/// How serious a problem is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}

/// A single diagnostic raised while validating a transfer rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Problem {
    /// A required field is empty.
    MissingValue { field: &'static str },

    /// A field holds a value outside what is allowed or plausible.
    InvalidValue {
        field: &'static str,
        value: String,
        severity: Severity,
        reason: Option<String>,
    },

    /// A timing field is filled although the transfer type is not 2.
    MinimumTransferTimeSetWithInvalidTransferType { transfer_type: String },

    /// The two stops are far apart for a transfer.
    TransferDistanceTooBig {
        from_stop_id: String,
        to_stop_id: String,
        distance: f64,
        severity: Severity,
    },

    /// The minimum transfer time implies walking faster than is realistic.
    TransferWalkingSpeedTooFast {
        from_stop_id: String,
        to_stop_id: String,
        transfer_time: i64,
        distance: f64,
    },
}

impl Problem {
    /// Returns the severity of this problem.
    pub fn severity(&self) -> Severity {
        match self {
            Problem::MissingValue { .. } => Severity::Error,
            Problem::InvalidValue { severity, .. } => *severity,
            Problem::MinimumTransferTimeSetWithInvalidTransferType { .. } => Severity::Error,
            Problem::TransferDistanceTooBig { severity, .. } => *severity,
            Problem::TransferWalkingSpeedTooFast { .. } => Severity::Warning,
        }
    }

    /// Returns true for error-severity problems.
    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    /// Stable machine-readable code for this kind of problem.
    pub fn kind(&self) -> &'static str {
        match self {
            Problem::MissingValue { .. } => "missing_value",
            Problem::InvalidValue { .. } => "invalid_value",
            Problem::MinimumTransferTimeSetWithInvalidTransferType { .. } => {
                "minimum_transfer_time_set_with_invalid_transfer_type"
            }
            Problem::TransferDistanceTooBig { .. } => "transfer_distance_too_big",
            Problem::TransferWalkingSpeedTooFast { .. } => "transfer_walking_speed_too_fast",
        }
    }

    /// The field a problem is about, if it concerns a single field.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Problem::MissingValue { field } | Problem::InvalidValue { field, .. } => Some(*field),
            _ => None,
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::MissingValue { field } => write!(f, "missing value for field {field}"),
            Problem::InvalidValue {
                field,
                value,
                reason,
                ..
            } => {
                write!(f, "invalid value {value:?} in field {field}")?;
                if let Some(reason) = reason {
                    write!(f, ": {reason}")?;
                }
                Ok(())
            }
            Problem::MinimumTransferTimeSetWithInvalidTransferType { transfer_type } => write!(
                f,
                "transfer timing fields should only be set when transfer_type is 2, \
                 but it is {transfer_type}"
            ),
            Problem::TransferDistanceTooBig {
                from_stop_id,
                to_stop_id,
                distance,
                ..
            } => write!(
                f,
                "transfer from stop {from_stop_id} to stop {to_stop_id} is {distance:.0}m long"
            ),
            Problem::TransferWalkingSpeedTooFast {
                from_stop_id,
                to_stop_id,
                transfer_time,
                distance,
            } => write!(
                f,
                "min_transfer_time of {transfer_time}s from stop {from_stop_id} to stop \
                 {to_stop_id} is too short to walk {distance:.0}m"
            ),
        }
    }
}
