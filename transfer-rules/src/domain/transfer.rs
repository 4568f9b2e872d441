//! The transfer rule record.
//!
//! A [`TransferRule`] is built once, either from discrete values through
//! [`TransferRule::builder`] or from a raw column map through
//! [`TransferRule::from_fields`]. Numeric columns are coerced on
//! construction; anything that does not coerce is kept for validation to
//! report.

use std::fmt;

use chrono::Duration;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::problems::ProblemReporter;
use crate::schedule::{StopDirectory, TransferRegistry};
use crate::validate::TransferValidator;

use super::codes::{TransferType, WheelchairTransfer};
use super::field::FieldValue;

/// Identity of a transfer rule: the ordered `(from_stop_id, to_stop_id)`
/// pair. `(A, B)` and `(B, A)` are different keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransferKey {
    pub from_stop_id: String,
    pub to_stop_id: String,
}

impl TransferKey {
    pub fn new(from_stop_id: impl Into<String>, to_stop_id: impl Into<String>) -> Self {
        Self {
            from_stop_id: from_stop_id.into(),
            to_stop_id: to_stop_id.into(),
        }
    }
}

impl fmt::Display for TransferKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.from_stop_id, self.to_stop_id)
    }
}

/// A rule describing how riders may transfer between two stops.
///
/// # Examples
///
/// ```
/// use transfer_rules::domain::{FieldValue, TransferRule, TransferType};
///
/// let rule = TransferRule::builder("A", "B")
///     .transfer_type(2)
///     .min_transfer_time("180")
///     .build();
///
/// assert_eq!(rule.transfer_type_code(), Some(TransferType::MinimumTime));
/// assert_eq!(rule.min_transfer_time, FieldValue::Parsed(180));
/// assert_eq!(rule.min_walk_time, FieldValue::Absent);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRule {
    pub from_stop_id: String,
    pub to_stop_id: String,

    /// Never [`FieldValue::Absent`]: a missing or blank transfer type
    /// defaults to 0.
    pub transfer_type: FieldValue,

    /// Seconds that must be available to make the transfer.
    pub min_transfer_time: FieldValue,

    /// Seconds needed to walk between the two stops.
    pub min_walk_time: FieldValue,

    /// Seconds a wheelchair user needs for the transfer.
    pub min_wheelchair_time: FieldValue,

    /// Extra seconds recommended on top of the minimum.
    pub suggested_buffer_time: FieldValue,

    pub wheelchair_transfer: FieldValue,
}

impl TransferRule {
    /// Name of the GTFS table transfer rules are read from.
    pub const TABLE_NAME: &'static str = "transfers";

    /// Columns every transfer row must carry.
    pub const REQUIRED_FIELD_NAMES: [&'static str; 3] =
        ["from_stop_id", "to_stop_id", "transfer_type"];

    /// Every column a transfer row may carry.
    pub const FIELD_NAMES: [&'static str; 8] = [
        "from_stop_id",
        "to_stop_id",
        "transfer_type",
        "min_transfer_time",
        "min_walk_time",
        "min_wheelchair_time",
        "suggested_buffer_time",
        "wheelchair_transfer",
    ];

    /// Start building a rule from discrete values.
    pub fn builder(
        from_stop_id: impl Into<String>,
        to_stop_id: impl Into<String>,
    ) -> TransferRuleBuilder {
        TransferRuleBuilder::new(from_stop_id, to_stop_id)
    }

    /// Build a rule from `(column, raw value)` pairs.
    ///
    /// A column that does not appear is treated as not supplied. Unknown
    /// columns are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use transfer_rules::domain::{FieldValue, TransferRule};
    ///
    /// let rule = TransferRule::from_fields([
    ///     ("from_stop_id", "A"),
    ///     ("to_stop_id", "B"),
    ///     ("transfer_type", ""),
    ///     ("min_transfer_time", "soon"),
    /// ]);
    ///
    /// assert_eq!(rule.transfer_type, FieldValue::Parsed(0));
    /// assert_eq!(rule.min_transfer_time, FieldValue::Unparsed("soon".into()));
    /// ```
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut row = TransferRow::default();
        for (name, value) in fields {
            let value = Some(value.as_ref().to_string());
            match name.as_ref() {
                "from_stop_id" => row.from_stop_id = value,
                "to_stop_id" => row.to_stop_id = value,
                "transfer_type" => row.transfer_type = value,
                "min_transfer_time" => row.min_transfer_time = value,
                "min_walk_time" => row.min_walk_time = value,
                "min_wheelchair_time" => row.min_wheelchair_time = value,
                "suggested_buffer_time" => row.suggested_buffer_time = value,
                "wheelchair_transfer" => row.wheelchair_transfer = value,
                other => trace!(column = other, "ignoring unknown transfer column"),
            }
        }
        row.into()
    }

    /// The rule's identity within a schedule.
    pub fn key(&self) -> TransferKey {
        TransferKey::new(self.from_stop_id.as_str(), self.to_stop_id.as_str())
    }

    /// The transfer type, if it is one of the known codes.
    pub fn transfer_type_code(&self) -> Option<TransferType> {
        self.transfer_type
            .as_int()
            .and_then(TransferType::from_code)
    }

    /// The wheelchair transfer flag, if present and a known code.
    pub fn wheelchair_transfer_code(&self) -> Option<WheelchairTransfer> {
        self.wheelchair_transfer
            .as_int()
            .and_then(WheelchairTransfer::from_code)
    }

    /// Returns true if the transfer type requires a minimum transfer time.
    pub fn requires_minimum_time(&self) -> bool {
        self.transfer_type_code() == Some(TransferType::MinimumTime)
    }

    /// The minimum transfer time as a Duration, if it parsed.
    pub fn min_transfer_duration(&self) -> Option<Duration> {
        self.min_transfer_time.as_int().map(Duration::seconds)
    }

    /// Register this rule with a schedule.
    ///
    /// The registry takes ownership; storage and removal are its concern.
    pub fn add_to_schedule<R: TransferRegistry + ?Sized>(self, registry: &mut R) {
        registry.add_transfer(self);
    }

    /// Validate with the default thresholds.
    ///
    /// Stop-dependent checks run only when `stops` is given and every
    /// self-contained check passed.
    pub fn validate<P: ProblemReporter + ?Sized>(
        &self,
        stops: Option<&dyn StopDirectory>,
        reporter: &mut P,
    ) {
        TransferValidator::default().validate(self, stops, reporter);
    }
}

/// Fluent builder for [`TransferRule`].
///
/// Every numeric setter takes either an integer or raw text; text goes
/// through the same coercion as [`TransferRule::from_fields`].
#[derive(Debug, Clone)]
pub struct TransferRuleBuilder {
    rule: TransferRule,
}

impl TransferRuleBuilder {
    fn new(from_stop_id: impl Into<String>, to_stop_id: impl Into<String>) -> Self {
        Self {
            rule: TransferRule {
                from_stop_id: from_stop_id.into(),
                to_stop_id: to_stop_id.into(),
                transfer_type: FieldValue::Absent,
                min_transfer_time: FieldValue::Absent,
                min_walk_time: FieldValue::Absent,
                min_wheelchair_time: FieldValue::Absent,
                suggested_buffer_time: FieldValue::Absent,
                wheelchair_transfer: FieldValue::Absent,
            },
        }
    }

    pub fn transfer_type(mut self, value: impl Into<FieldValue>) -> Self {
        self.rule.transfer_type = value.into();
        self
    }

    pub fn min_transfer_time(mut self, value: impl Into<FieldValue>) -> Self {
        self.rule.min_transfer_time = value.into();
        self
    }

    pub fn min_walk_time(mut self, value: impl Into<FieldValue>) -> Self {
        self.rule.min_walk_time = value.into();
        self
    }

    pub fn min_wheelchair_time(mut self, value: impl Into<FieldValue>) -> Self {
        self.rule.min_wheelchair_time = value.into();
        self
    }

    pub fn suggested_buffer_time(mut self, value: impl Into<FieldValue>) -> Self {
        self.rule.suggested_buffer_time = value.into();
        self
    }

    pub fn wheelchair_transfer(mut self, value: impl Into<FieldValue>) -> Self {
        self.rule.wheelchair_transfer = value.into();
        self
    }

    /// Finish the rule, defaulting an absent transfer type to 0.
    pub fn build(mut self) -> TransferRule {
        if !self.rule.transfer_type.is_present() {
            self.rule.transfer_type = FieldValue::Parsed(TransferType::default().code());
        }
        self.rule
    }
}

/// A raw `transfers.txt` row, as produced by any serde source.
///
/// Every column is optional text; coercion happens on conversion into a
/// [`TransferRule`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferRow {
    pub from_stop_id: Option<String>,
    pub to_stop_id: Option<String>,
    pub transfer_type: Option<String>,
    pub min_transfer_time: Option<String>,
    pub min_walk_time: Option<String>,
    pub min_wheelchair_time: Option<String>,
    pub suggested_buffer_time: Option<String>,
    pub wheelchair_transfer: Option<String>,
}

impl From<TransferRow> for TransferRule {
    fn from(row: TransferRow) -> Self {
        let coerce = |raw: Option<String>| FieldValue::coerce(raw.as_deref());

        TransferRule::builder(
            row.from_stop_id.unwrap_or_default(),
            row.to_stop_id.unwrap_or_default(),
        )
        .transfer_type(coerce(row.transfer_type))
        .min_transfer_time(coerce(row.min_transfer_time))
        .min_walk_time(coerce(row.min_walk_time))
        .min_wheelchair_time(coerce(row.min_wheelchair_time))
        .suggested_buffer_time(coerce(row.suggested_buffer_time))
        .wheelchair_transfer(coerce(row.wheelchair_transfer))
        .build()
    }
}
