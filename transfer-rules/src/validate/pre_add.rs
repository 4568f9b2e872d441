//! Checks that need nothing but the rule itself.
//!
//! Each check reports its findings and returns whether the rule is still
//! structurally sound. Range findings (negative, large, implausible) never
//! flip that flag; only missing IDs, an invalid transfer type and
//! non-integer timing fields do.

use crate::domain::{FieldValue, TransferRule, TransferType, WheelchairTransfer};
use crate::problems::{ProblemReporter, Severity};

use super::config::ValidationConfig;

const NEGATIVE: &str = "This field cannot contain a negative value.";
const IMPLAUSIBLE: &str =
    "The value is very large for a transfer time and most likely indicates an error.";
const LARGE: &str = "The value is large for a transfer time and most likely indicates an error.";
const NOT_AN_INTEGER: &str = "If present, this field should contain an integer value.";
const REQUIRED_FOR_MINIMUM_TIME: &str = "This field must be filled when transfer_type == 2.";
const REQUIRED_FOR_WHEELCHAIR: &str =
    "This field must be filled when wheelchair_transfer == 1 and transfer_type == 2.";
const WHEELCHAIR_NOT_POSSIBLE: &str = "This field cannot be filled when wheelchair_transfer == 2.";

/// When an absent timing field is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Requirement {
    Never,
    WhenMinimumTime,
    WhenMinimumTimeAndWheelchairPossible,
}

/// One of the four timing fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimingField {
    MinTransferTime,
    MinWalkTime,
    MinWheelchairTime,
    SuggestedBufferTime,
}

impl TimingField {
    const ALL: [TimingField; 4] = [
        TimingField::MinTransferTime,
        TimingField::MinWalkTime,
        TimingField::MinWheelchairTime,
        TimingField::SuggestedBufferTime,
    ];

    fn name(self) -> &'static str {
        match self {
            TimingField::MinTransferTime => "min_transfer_time",
            TimingField::MinWalkTime => "min_walk_time",
            TimingField::MinWheelchairTime => "min_wheelchair_time",
            TimingField::SuggestedBufferTime => "suggested_buffer_time",
        }
    }

    fn value(self, rule: &TransferRule) -> &FieldValue {
        match self {
            TimingField::MinTransferTime => &rule.min_transfer_time,
            TimingField::MinWalkTime => &rule.min_walk_time,
            TimingField::MinWheelchairTime => &rule.min_wheelchair_time,
            TimingField::SuggestedBufferTime => &rule.suggested_buffer_time,
        }
    }

    fn requirement(self) -> Requirement {
        match self {
            TimingField::MinTransferTime | TimingField::MinWalkTime => Requirement::WhenMinimumTime,
            TimingField::MinWheelchairTime => Requirement::WhenMinimumTimeAndWheelchairPossible,
            TimingField::SuggestedBufferTime => Requirement::Never,
        }
    }
}

/// Run every self-contained check, in order, and return whether the rule
/// is sound enough for the stop-dependent checks.
pub(super) fn validate_before_add<P: ProblemReporter + ?Sized>(
    config: &ValidationConfig,
    rule: &TransferRule,
    reporter: &mut P,
) -> bool {
    let mut valid = true;
    valid &= check_stop_id_present("from_stop_id", &rule.from_stop_id, reporter);
    valid &= check_stop_id_present("to_stop_id", &rule.to_stop_id, reporter);
    valid &= check_transfer_type(rule, reporter);
    for field in TimingField::ALL {
        valid &= check_timing_field(config, rule, field, reporter);
    }
    valid
}

fn check_stop_id_present<P: ProblemReporter + ?Sized>(
    field: &'static str,
    stop_id: &str,
    reporter: &mut P,
) -> bool {
    if stop_id.trim().is_empty() {
        reporter.missing_value(field);
        return false;
    }
    true
}

fn check_transfer_type<P: ProblemReporter + ?Sized>(rule: &TransferRule, reporter: &mut P) -> bool {
    let valid = match &rule.transfer_type {
        FieldValue::Absent => true,
        FieldValue::Parsed(code) => TransferType::from_code(*code).is_some(),
        FieldValue::Unparsed(_) => false,
    };
    if !valid {
        reporter.invalid_value(
            "transfer_type",
            rule.transfer_type.to_string(),
            Severity::Error,
            None,
        );
    }
    valid
}

fn check_timing_field<P: ProblemReporter + ?Sized>(
    config: &ValidationConfig,
    rule: &TransferRule,
    field: TimingField,
    reporter: &mut P,
) -> bool {
    let value = field.value(rule);

    let seconds = match value {
        FieldValue::Absent => {
            if let Some(reason) = missing_reason(rule, field.requirement()) {
                reporter.invalid_value(field.name(), value.to_string(), Severity::Error, Some(reason));
            }
            return true;
        }
        FieldValue::Parsed(seconds) => *seconds,
        FieldValue::Unparsed(_) => {
            report_wrong_transfer_type(rule, reporter);
            reporter.invalid_value(
                field.name(),
                value.to_string(),
                Severity::Error,
                Some(NOT_AN_INTEGER),
            );
            return false;
        }
    };

    report_wrong_transfer_type(rule, reporter);

    let finding = if field == TimingField::MinWheelchairTime
        && rule.wheelchair_transfer.is(WheelchairTransfer::NotPossible.code())
    {
        Some((Severity::Error, WHEELCHAIR_NOT_POSSIBLE))
    } else {
        classify_seconds(config, seconds)
    };

    if let Some((severity, reason)) = finding {
        reporter.invalid_value(field.name(), value.to_string(), severity, Some(reason));
    }
    true
}

/// Timing fields only apply to minimum-time transfers.
fn report_wrong_transfer_type<P: ProblemReporter + ?Sized>(rule: &TransferRule, reporter: &mut P) {
    if !rule.requires_minimum_time() {
        reporter.minimum_transfer_time_set_with_invalid_transfer_type(rule.transfer_type.to_string());
    }
}

fn missing_reason(rule: &TransferRule, requirement: Requirement) -> Option<&'static str> {
    match requirement {
        Requirement::Never => None,
        Requirement::WhenMinimumTime if rule.requires_minimum_time() => {
            Some(REQUIRED_FOR_MINIMUM_TIME)
        }
        Requirement::WhenMinimumTimeAndWheelchairPossible
            if rule.requires_minimum_time()
                && rule
                    .wheelchair_transfer
                    .is(WheelchairTransfer::Possible.code()) =>
        {
            Some(REQUIRED_FOR_WHEELCHAIR)
        }
        _ => None,
    }
}

/// Classify a timing value by magnitude. `None` means it is plausible.
fn classify_seconds(config: &ValidationConfig, seconds: i64) -> Option<(Severity, &'static str)> {
    if seconds < 0 {
        Some((Severity::Error, NEGATIVE))
    } else if seconds >= config.implausible_time_secs {
        Some((Severity::Error, IMPLAUSIBLE))
    } else if seconds >= config.large_time_warning_secs {
        Some((Severity::Warning, LARGE))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::{Problem, ProblemCollector};

    fn run(rule: &TransferRule) -> (bool, ProblemCollector) {
        let mut collector = ProblemCollector::new();
        let valid = validate_before_add(&ValidationConfig::default(), rule, &mut collector);
        (valid, collector)
    }

    fn invalid(field: &'static str, value: &str, severity: Severity, reason: &str) -> Problem {
        Problem::InvalidValue {
            field,
            value: value.to_string(),
            severity,
            reason: Some(reason.to_string()),
        }
    }

    fn wrong_type(transfer_type: &str) -> Problem {
        Problem::MinimumTransferTimeSetWithInvalidTransferType {
            transfer_type: transfer_type.to_string(),
        }
    }

    #[test]
    fn minimal_rule_is_clean() {
        let (valid, problems) = run(&TransferRule::builder("A", "B").build());
        assert!(valid);
        assert!(problems.is_empty());
    }

    #[test]
    fn missing_stop_ids() {
        let (valid, problems) = run(&TransferRule::builder("", " ").build());
        assert!(!valid);
        assert_eq!(
            problems.problems(),
            &[
                Problem::MissingValue { field: "from_stop_id" },
                Problem::MissingValue { field: "to_stop_id" },
            ]
        );
    }

    #[test]
    fn transfer_type_out_of_range() {
        for raw in ["4", "-1", "x", "1.0"] {
            let rule = TransferRule::builder("A", "B").transfer_type(raw).build();
            let (valid, problems) = run(&rule);
            assert!(!valid, "{raw} should be rejected");
            assert_eq!(
                problems.problems(),
                &[Problem::InvalidValue {
                    field: "transfer_type",
                    value: raw.to_string(),
                    severity: Severity::Error,
                    reason: None,
                }]
            );
        }
    }

    #[test]
    fn transfer_type_in_range() {
        for code in [0, 1, 3] {
            let rule = TransferRule::builder("A", "B").transfer_type(code).build();
            let (valid, problems) = run(&rule);
            assert!(valid);
            assert!(problems.is_empty());
        }
    }

    #[test]
    fn negative_time_is_a_single_error() {
        let rule = TransferRule::builder("A", "B")
            .transfer_type(2)
            .min_transfer_time(-5)
            .build();
        let (valid, problems) = run(&rule);

        assert!(valid);
        assert_eq!(
            problems.problems(),
            &[invalid("min_transfer_time", "-5", Severity::Error, NEGATIVE)]
        );
    }

    #[test]
    fn implausible_time_is_an_error() {
        let rule = TransferRule::builder("A", "B")
            .transfer_type(2)
            .min_transfer_time(90_000)
            .build();
        let (valid, problems) = run(&rule);

        assert!(valid);
        assert_eq!(
            problems.problems(),
            &[invalid("min_transfer_time", "90000", Severity::Error, IMPLAUSIBLE)]
        );
    }

    #[test]
    fn large_time_is_a_warning() {
        let rule = TransferRule::builder("A", "B")
            .transfer_type(2)
            .min_transfer_time(12_000)
            .build();
        let (valid, problems) = run(&rule);

        assert!(valid);
        assert_eq!(
            problems.problems(),
            &[invalid("min_transfer_time", "12000", Severity::Warning, LARGE)]
        );
        assert!(!problems.has_errors());
    }

    #[test]
    fn tier_boundaries() {
        let config = ValidationConfig::default();
        assert_eq!(classify_seconds(&config, 0), None);
        assert_eq!(classify_seconds(&config, 10_799), None);
        assert_eq!(
            classify_seconds(&config, 10_800),
            Some((Severity::Warning, LARGE))
        );
        assert_eq!(
            classify_seconds(&config, 86_399),
            Some((Severity::Warning, LARGE))
        );
        assert_eq!(
            classify_seconds(&config, 86_400),
            Some((Severity::Error, IMPLAUSIBLE))
        );
        assert_eq!(
            classify_seconds(&config, -1),
            Some((Severity::Error, NEGATIVE))
        );
    }

    #[test]
    fn small_values_are_silent_for_every_field() {
        let rule = TransferRule::builder("A", "B")
            .transfer_type(2)
            .wheelchair_transfer(1)
            .min_transfer_time(300)
            .min_walk_time(240)
            .min_wheelchair_time(420)
            .suggested_buffer_time(60)
            .build();
        let (valid, problems) = run(&rule);

        assert!(valid);
        assert!(problems.is_empty(), "{:?}", problems.problems());
    }

    #[test]
    fn non_integer_blocks() {
        let rule = TransferRule::builder("A", "B")
            .transfer_type(2)
            .min_walk_time("five")
            .build();
        let (valid, problems) = run(&rule);

        assert!(!valid);
        assert_eq!(
            problems.problems(),
            &[
                invalid(
                    "min_transfer_time",
                    "",
                    Severity::Error,
                    REQUIRED_FOR_MINIMUM_TIME
                ),
                invalid("min_walk_time", "five", Severity::Error, NOT_AN_INTEGER),
            ]
        );
    }

    #[test]
    fn timing_field_with_wrong_transfer_type() {
        let rule = TransferRule::builder("A", "B")
            .transfer_type(1)
            .suggested_buffer_time(30)
            .build();
        let (valid, problems) = run(&rule);

        assert!(valid);
        assert_eq!(problems.problems(), &[wrong_type("1")]);
    }

    #[test]
    fn wrong_transfer_type_precedes_range_finding() {
        let rule = TransferRule::builder("A", "B").min_transfer_time(-5).build();
        let (valid, problems) = run(&rule);

        assert!(valid);
        assert_eq!(
            problems.problems(),
            &[
                wrong_type("0"),
                invalid("min_transfer_time", "-5", Severity::Error, NEGATIVE),
            ]
        );
    }

    #[test]
    fn required_when_minimum_time() {
        let rule = TransferRule::builder("A", "B").transfer_type(2).build();
        let (valid, problems) = run(&rule);

        // Missing timing fields are reported but do not block.
        assert!(valid);
        assert_eq!(
            problems.problems(),
            &[
                invalid(
                    "min_transfer_time",
                    "",
                    Severity::Error,
                    REQUIRED_FOR_MINIMUM_TIME
                ),
                invalid("min_walk_time", "", Severity::Error, REQUIRED_FOR_MINIMUM_TIME),
            ]
        );
    }

    #[test]
    fn wheelchair_time_required_only_when_possible() {
        let base = || {
            TransferRule::builder("A", "B")
                .transfer_type(2)
                .min_transfer_time(120)
                .min_walk_time(90)
        };

        let (_, problems) = run(&base().wheelchair_transfer(1).build());
        assert_eq!(
            problems.problems(),
            &[invalid(
                "min_wheelchair_time",
                "",
                Severity::Error,
                REQUIRED_FOR_WHEELCHAIR
            )]
        );

        let (_, problems) = run(&base().wheelchair_transfer(0).build());
        assert!(problems.is_empty());

        let (_, problems) = run(&base().build());
        assert!(problems.is_empty());
    }

    #[test]
    fn wheelchair_time_forbidden_when_not_possible() {
        let rule = TransferRule::builder("A", "B")
            .transfer_type(2)
            .min_transfer_time(120)
            .min_walk_time(90)
            .wheelchair_transfer(2)
            .min_wheelchair_time(90_000)
            .build();
        let (valid, problems) = run(&rule);

        // Checked instead of the magnitude tiers.
        assert!(valid);
        assert_eq!(
            problems.problems(),
            &[invalid(
                "min_wheelchair_time",
                "90000",
                Severity::Error,
                WHEELCHAIR_NOT_POSSIBLE
            )]
        );
    }

    #[test]
    fn buffer_time_never_required() {
        let rule = TransferRule::builder("A", "B")
            .transfer_type(2)
            .min_transfer_time(120)
            .min_walk_time(90)
            .build();
        let (_, problems) = run(&rule);
        assert!(problems.is_empty());
    }

    #[test]
    fn invalid_transfer_type_with_timing_field() {
        let rule = TransferRule::builder("A", "B")
            .transfer_type("x")
            .min_transfer_time(60)
            .build();
        let (valid, problems) = run(&rule);

        assert!(!valid);
        assert_eq!(
            problems.problems(),
            &[
                Problem::InvalidValue {
                    field: "transfer_type",
                    value: "x".into(),
                    severity: Severity::Error,
                    reason: None,
                },
                wrong_type("x"),
            ]
        );
    }
}
