//! Stop identifiers and stops.

use std::borrow::Borrow;
use std::fmt;

use crate::geo::Coordinates;

/// Error returned when creating an invalid stop ID.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop ID: {reason}")]
pub struct InvalidStopId {
    reason: &'static str,
}

/// A GTFS `stop_id`.
///
/// Stop IDs are opaque strings. The only validation is that they must be
/// non-empty.
///
/// # Examples
///
/// ```
/// use transfer_rules::domain::StopId;
///
/// let id = StopId::new("place-north").unwrap();
/// assert_eq!(id.as_str(), "place-north");
///
/// // Empty strings are rejected
/// assert!(StopId::new("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(String);

impl StopId {
    /// Create a stop ID, rejecting empty strings.
    pub fn new(s: impl Into<String>) -> Result<Self, InvalidStopId> {
        let s = s.into();
        if s.is_empty() {
            return Err(InvalidStopId {
                reason: "stop ID cannot be empty",
            });
        }
        Ok(StopId(s))
    }

    /// Returns the stop ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the StopId and returns the inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Borrow<str> for StopId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stop as seen by transfer validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub id: StopId,

    /// Rider-facing name, if known.
    pub name: Option<String>,

    /// Position of the stop. Generic nodes and boarding areas may lack one.
    pub coordinates: Option<Coordinates>,
}

impl Stop {
    /// Create a stop at the given position.
    pub fn new(id: StopId, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            name: None,
            coordinates: Some(Coordinates::new(latitude, longitude)),
        }
    }

    /// Create a stop with no position.
    pub fn without_coordinates(id: StopId) -> Self {
        Self {
            id,
            name: None,
            coordinates: None,
        }
    }

    /// Set the rider-facing name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any non-empty string can be used as a stop ID
        #[test]
        fn nonempty_always_valid(s in ".+") {
            let id = StopId::new(s.clone()).unwrap();
            prop_assert_eq!(id.as_str(), s.as_str());
        }
    }
}
