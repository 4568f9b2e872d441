//! Enumerated transfer codes.

use std::fmt;

/// Error returned when an integer is outside an enumerated code's range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {field} code {code}: {reason}")]
pub struct InvalidCode {
    field: &'static str,
    code: i64,
    reason: &'static str,
}

/// Indicates the type of connection for a `(from_stop_id, to_stop_id)` pair.
///
/// See <https://gtfs.org/schedule/reference/#transferstxt>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransferType {
    /// Recommended transfer point between routes.
    #[default]
    Recommended = 0,

    /// Timed transfer point between two routes. The departing vehicle is
    /// expected to wait for the arriving one.
    Timed = 1,

    /// Transfer requires a minimum amount of time between arrival and
    /// departure, given by `min_transfer_time`.
    MinimumTime = 2,

    /// Transfers are not possible between routes at this location.
    NotPossible = 3,
}

impl TransferType {
    /// Look up a transfer type by its GTFS code.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(TransferType::Recommended),
            1 => Some(TransferType::Timed),
            2 => Some(TransferType::MinimumTime),
            3 => Some(TransferType::NotPossible),
            _ => None,
        }
    }

    /// Returns the GTFS code.
    pub fn code(self) -> i64 {
        self as i64
    }
}

impl TryFrom<i64> for TransferType {
    type Error = InvalidCode;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        TransferType::from_code(code).ok_or(InvalidCode {
            field: "transfer_type",
            code,
            reason: "must be between 0 and 3",
        })
    }
}

impl fmt::Display for TransferType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransferType::Recommended => "recommended",
            TransferType::Timed => "timed",
            TransferType::MinimumTime => "minimum time",
            TransferType::NotPossible => "not possible",
        };
        f.write_str(name)
    }
}

/// Whether a transfer can be made by a wheelchair user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WheelchairTransfer {
    /// No accessibility information.
    #[default]
    Unknown = 0,

    /// The transfer is possible for wheelchair users.
    Possible = 1,

    /// The transfer is not possible for wheelchair users.
    NotPossible = 2,
}

impl WheelchairTransfer {
    /// Look up a wheelchair transfer flag by its code.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(WheelchairTransfer::Unknown),
            1 => Some(WheelchairTransfer::Possible),
            2 => Some(WheelchairTransfer::NotPossible),
            _ => None,
        }
    }

    /// Returns the code.
    pub fn code(self) -> i64 {
        self as i64
    }
}

impl TryFrom<i64> for WheelchairTransfer {
    type Error = InvalidCode;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        WheelchairTransfer::from_code(code).ok_or(InvalidCode {
            field: "wheelchair_transfer",
            code,
            reason: "must be between 0 and 2",
        })
    }
}
