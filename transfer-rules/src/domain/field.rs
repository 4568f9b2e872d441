//! Coerced field values.
//!
//! Numeric columns of a transfer record arrive as raw text (or not at all).
//! Coercion never fails: a value that cannot be read as a non-negative
//! integer is kept verbatim so validation can report it later.

use std::fmt;

/// The outcome of coercing one optional numeric field.
///
/// # Examples
///
/// ```
/// use transfer_rules::domain::FieldValue;
///
/// assert_eq!(FieldValue::coerce(Some("120")), FieldValue::Parsed(120));
/// assert_eq!(FieldValue::coerce(Some("")), FieldValue::Absent);
/// assert_eq!(FieldValue::coerce(None), FieldValue::Absent);
/// assert_eq!(
///     FieldValue::coerce(Some("two minutes")),
///     FieldValue::Unparsed("two minutes".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FieldValue {
    /// Not supplied, or supplied blank.
    #[default]
    Absent,

    /// An integer value. Typed construction may carry a negative number;
    /// text input only ever yields non-negative values here.
    Parsed(i64),

    /// Supplied text that is not a non-negative integer, kept as given.
    Unparsed(String),
}

impl FieldValue {
    /// Coerce a raw column value.
    ///
    /// Surrounding whitespace is ignored, as are a leading `+` and leading
    /// zeros. Negative text does not parse. Digit strings too large for an
    /// `i64` saturate to `i64::MAX`.
    pub fn coerce(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return FieldValue::Absent;
        };

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return FieldValue::Absent;
        }

        match parse_non_negative(trimmed) {
            Some(value) => FieldValue::Parsed(value),
            None => FieldValue::Unparsed(raw.to_string()),
        }
    }

    /// Returns true unless the field is absent.
    pub fn is_present(&self) -> bool {
        !matches!(self, FieldValue::Absent)
    }

    /// Returns the integer value, if the field parsed.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Parsed(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the raw text of a field that failed coercion.
    pub fn as_unparsed(&self) -> Option<&str> {
        match self {
            FieldValue::Unparsed(raw) => Some(raw),
            _ => None,
        }
    }

    /// Returns true if the field holds exactly `value`.
    pub fn is(&self, value: i64) -> bool {
        self.as_int() == Some(value)
    }
}

fn parse_non_negative(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('+').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Only overflow can fail here.
    Some(digits.parse().unwrap_or(i64::MAX))
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Absent => Ok(()),
            FieldValue::Parsed(value) => write!(f, "{value}"),
            FieldValue::Unparsed(raw) => f.write_str(raw),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Parsed(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Parsed(value.into())
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Parsed(value.into())
    }
}

impl From<&str> for FieldValue {
    fn from(raw: &str) -> Self {
        FieldValue::coerce(Some(raw))
    }
}

impl From<String> for FieldValue {
    fn from(raw: String) -> Self {
        FieldValue::coerce(Some(&raw))
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Absent, Into::into)
    }
}
