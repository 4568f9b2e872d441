//! A reporter that logs problems through `tracing`.

use tracing::{error, warn};

use super::collector::ProblemCollector;
use super::problem::{Problem, Severity};
use super::reporter::ProblemReporter;

/// Logs every problem as a structured event, then passes it on.
///
/// Errors are logged at `ERROR`, warnings at `WARN`.
#[derive(Debug, Clone, Default)]
pub struct LoggingReporter<R = ProblemCollector> {
    inner: R,
    errors: usize,
    warnings: usize,
}

impl<R: ProblemReporter> LoggingReporter<R> {
    /// Wrap another reporter.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            errors: 0,
            warnings: 0,
        }
    }

    /// Number of error-severity problems seen.
    pub fn error_count(&self) -> usize {
        self.errors
    }

    /// Number of warning-severity problems seen.
    pub fn warning_count(&self) -> usize {
        self.warnings
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: ProblemReporter> ProblemReporter for LoggingReporter<R> {
    fn report(&mut self, problem: Problem) {
        match problem.severity() {
            Severity::Error => {
                self.errors += 1;
                error!(kind = problem.kind(), field = problem.field(), "{problem}");
            }
            Severity::Warning => {
                self.warnings += 1;
                warn!(kind = problem.kind(), field = problem.field(), "{problem}");
            }
        }
        self.inner.report(problem);
    }
}
