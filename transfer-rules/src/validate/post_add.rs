//! Checks that need the schedule's stops.

use tracing::debug;

use crate::domain::TransferRule;
use crate::geo::approximate_distance;
use crate::problems::{ProblemReporter, Severity};
use crate::schedule::StopDirectory;

use super::config::ValidationConfig;

/// Distance between the rule's two stops, in meters.
///
/// Returns `None` if either stop is unknown or has no coordinates.
pub fn transfer_distance<S: StopDirectory + ?Sized>(rule: &TransferRule, stops: &S) -> Option<f64> {
    let from = stops.stop(&rule.from_stop_id)?.coordinates?;
    let to = stops.stop(&rule.to_stop_id)?.coordinates?;
    Some(approximate_distance(&from, &to))
}

pub(super) fn validate_after_add<S, P>(
    config: &ValidationConfig,
    rule: &TransferRule,
    stops: &S,
    reporter: &mut P,
) where
    S: StopDirectory + ?Sized,
    P: ProblemReporter + ?Sized,
{
    let from_known = check_stop_exists("from_stop_id", &rule.from_stop_id, stops, reporter);
    let to_known = check_stop_exists("to_stop_id", &rule.to_stop_id, stops, reporter);
    if !(from_known && to_known) {
        return;
    }

    let Some(distance) = transfer_distance(rule, stops) else {
        debug!(
            key = %rule.key(),
            "stop without coordinates, skipping distance checks"
        );
        return;
    };

    check_distance(config, rule, distance, reporter);
    check_walking_speed(config, rule, distance, reporter);
}

fn check_stop_exists<S, P>(field: &'static str, stop_id: &str, stops: &S, reporter: &mut P) -> bool
where
    S: StopDirectory + ?Sized,
    P: ProblemReporter + ?Sized,
{
    if !stops.contains(stop_id) {
        reporter.invalid_value(field, stop_id.to_string(), Severity::Error, None);
        return false;
    }
    true
}

fn check_distance<P: ProblemReporter + ?Sized>(
    config: &ValidationConfig,
    rule: &TransferRule,
    distance: f64,
    reporter: &mut P,
) {
    let severity = if distance > config.distance_error_meters {
        Severity::Error
    } else if distance > config.distance_warning_meters {
        Severity::Warning
    } else {
        return;
    };
    reporter.transfer_distance_too_big(&rule.from_stop_id, &rule.to_stop_id, distance, severity);
}

/// Warn when `min_transfer_time` plus a buffer is still less than a fast
/// walker needs to cover the distance.
fn check_walking_speed<P: ProblemReporter + ?Sized>(
    config: &ValidationConfig,
    rule: &TransferRule,
    distance: f64,
    reporter: &mut P,
) {
    // Negative times were already reported before add.
    let Some(transfer_time) = rule.min_transfer_time.as_int().filter(|t| *t >= 0) else {
        return;
    };

    let fast_walk_secs = distance / config.fast_walking_speed_mps;
    let allowed_secs = transfer_time.saturating_add(config.walking_buffer_secs);
    if (allowed_secs as f64) < fast_walk_secs {
        reporter.transfer_walking_speed_too_fast(
            &rule.from_stop_id,
            &rule.to_stop_id,
            transfer_time,
            distance,
        );
    }
}
