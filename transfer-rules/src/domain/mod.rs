//! Domain types for transfer rules.
//!
//! Stop IDs and GTFS enumeration codes enforce their invariants at
//! construction time. Transfer rules are the exception: they keep whatever
//! the feed supplied, coerced where possible, so that validation can report
//! on it.

mod codes;
mod field;
mod stop;
mod transfer;

pub use codes::{InvalidCode, TransferType, WheelchairTransfer};
pub use field::FieldValue;
pub use stop::{InvalidStopId, Stop, StopId};
pub use transfer::{TransferKey, TransferRow, TransferRule, TransferRuleBuilder};
