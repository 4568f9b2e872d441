//! GTFS transfer rule validation.
//!
//! Transfer rules say how riders may change between two stops. This crate
//! coerces raw `transfers.txt` values into [`domain::TransferRule`]s, checks
//! them on their own and against the schedule's stops, and reports every
//! finding through a [`problems::ProblemReporter`].

pub mod domain;
pub mod geo;
pub mod problems;
pub mod schedule;
pub mod validate;
