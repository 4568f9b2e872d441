//! Reporters that keep what they are given.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::problem::{Problem, Severity};
use super::reporter::ProblemReporter;

/// Accumulates problems in the order they were reported.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProblemCollector {
    problems: Vec<Problem>,
}

impl ProblemCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// All problems, in report order.
    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    /// Error-severity problems, in report order.
    pub fn errors(&self) -> impl Iterator<Item = &Problem> {
        self.with_severity(Severity::Error)
    }

    /// Warning-severity problems, in report order.
    pub fn warnings(&self) -> impl Iterator<Item = &Problem> {
        self.with_severity(Severity::Warning)
    }

    fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Problem> {
        self.problems
            .iter()
            .filter(move |problem| problem.severity() == severity)
    }

    /// Returns true if any error-severity problem was reported.
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Forget everything collected so far.
    pub fn clear(&mut self) {
        self.problems.clear();
    }

    /// Consumes the collector and returns the problems.
    pub fn into_problems(self) -> Vec<Problem> {
        self.problems
    }
}

impl ProblemReporter for ProblemCollector {
    fn report(&mut self, problem: Problem) {
        self.problems.push(problem);
    }
}

/// A cloneable collector that many validation workers can append to.
///
/// Every clone reports into the same underlying [`ProblemCollector`].
#[derive(Debug, Clone, Default)]
pub struct SharedCollector {
    inner: Arc<Mutex<ProblemCollector>>,
}

impl SharedCollector {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ProblemCollector> {
        // A panic mid-push cannot leave the Vec inconsistent.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// A copy of everything collected so far.
    pub fn snapshot(&self) -> ProblemCollector {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl ProblemReporter for SharedCollector {
    fn report(&mut self, problem: Problem) {
        self.lock().report(problem);
    }
}
