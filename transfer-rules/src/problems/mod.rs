//! Structured diagnostics.
//!
//! Validation never aborts: every finding is handed to a
//! [`ProblemReporter`] and validation carries on. What happens to the
//! problems (collected, logged, rendered) is up to the reporter.

mod collector;
mod logging;
mod problem;
mod reporter;

pub use collector::{ProblemCollector, SharedCollector};
pub use logging::LoggingReporter;
pub use problem::{Problem, Severity};
pub use reporter::ProblemReporter;
