//! The sink validation reports into.

use super::problem::{Problem, Severity};

/// Receives diagnostics from transfer validation.
///
/// Implementors only need [`report`](ProblemReporter::report); the named
/// methods build the matching [`Problem`] and forward to it. Override them
/// to intercept a particular kind of problem.
pub trait ProblemReporter {
    /// Accept one problem.
    fn report(&mut self, problem: Problem);

    fn missing_value(&mut self, field: &'static str) {
        self.report(Problem::MissingValue { field });
    }

    fn invalid_value(
        &mut self,
        field: &'static str,
        value: String,
        severity: Severity,
        reason: Option<&str>,
    ) {
        self.report(Problem::InvalidValue {
            field,
            value,
            severity,
            reason: reason.map(str::to_string),
        });
    }

    fn minimum_transfer_time_set_with_invalid_transfer_type(&mut self, transfer_type: String) {
        self.report(Problem::MinimumTransferTimeSetWithInvalidTransferType { transfer_type });
    }

    fn transfer_distance_too_big(
        &mut self,
        from_stop_id: &str,
        to_stop_id: &str,
        distance: f64,
        severity: Severity,
    ) {
        self.report(Problem::TransferDistanceTooBig {
            from_stop_id: from_stop_id.to_string(),
            to_stop_id: to_stop_id.to_string(),
            distance,
            severity,
        });
    }

    fn transfer_walking_speed_too_fast(
        &mut self,
        from_stop_id: &str,
        to_stop_id: &str,
        transfer_time: i64,
        distance: f64,
    ) {
        self.report(Problem::TransferWalkingSpeedTooFast {
            from_stop_id: from_stop_id.to_string(),
            to_stop_id: to_stop_id.to_string(),
            transfer_time,
            distance,
        });
    }
}

impl<R: ProblemReporter + ?Sized> ProblemReporter for &mut R {
    fn report(&mut self, problem: Problem) {
        (**self).report(problem);
    }

    fn missing_value(&mut self, field: &'static str) {
        (**self).missing_value(field);
    }

    fn invalid_value(
        &mut self,
        field: &'static str,
        value: String,
        severity: Severity,
        reason: Option<&str>,
    ) {
        (**self).invalid_value(field, value, severity, reason);
    }

    fn minimum_transfer_time_set_with_invalid_transfer_type(&mut self, transfer_type: String) {
        (**self).minimum_transfer_time_set_with_invalid_transfer_type(transfer_type);
    }

    fn transfer_distance_too_big(
        &mut self,
        from_stop_id: &str,
        to_stop_id: &str,
        distance: f64,
        severity: Severity,
    ) {
        (**self).transfer_distance_too_big(from_stop_id, to_stop_id, distance, severity);
    }

    fn transfer_walking_speed_too_fast(
        &mut self,
        from_stop_id: &str,
        to_stop_id: &str,
        transfer_time: i64,
        distance: f64,
    ) {
        (**self).transfer_walking_speed_too_fast(from_stop_id, to_stop_id, transfer_time, distance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts missing values separately from everything else.
    #[derive(Default)]
    struct CountingReporter {
        missing: usize,
        other: Vec<Problem>,
    }

    impl ProblemReporter for CountingReporter {
        fn report(&mut self, problem: Problem) {
            self.other.push(problem);
        }

        fn missing_value(&mut self, _field: &'static str) {
            self.missing += 1;
        }
    }

    #[test]
    fn default_methods_forward_to_report() {
        let mut reporter = CountingReporter::default();
        reporter.invalid_value("transfer_type", "9".into(), Severity::Error, None);
        reporter.transfer_distance_too_big("A", "B", 250.0, Severity::Warning);

        assert_eq!(reporter.other.len(), 2);
        assert_eq!(
            reporter.other[1],
            Problem::TransferDistanceTooBig {
                from_stop_id: "A".into(),
                to_stop_id: "B".into(),
                distance: 250.0,
                severity: Severity::Warning,
            }
        );
    }

    #[test]
    fn mutable_reference_keeps_overrides() {
        fn report_into<P: ProblemReporter>(mut reporter: P) {
            reporter.missing_value("from_stop_id");
            reporter.minimum_transfer_time_set_with_invalid_transfer_type("1".into());
        }

        let mut reporter = CountingReporter::default();
        report_into(&mut reporter);
        assert_eq!(reporter.missing, 1);
        assert_eq!(reporter.other.len(), 1);
    }

    #[test]
    fn usable_as_trait_object() {
        let mut reporter = CountingReporter::default();
        let dynamic: &mut dyn ProblemReporter = &mut reporter;
        dynamic.transfer_walking_speed_too_fast("A", "B", 60, 1000.0);
        assert_eq!(reporter.other.len(), 1);
    }
}
