//! Transfer rule validation.
//!
//! Validation runs in two phases. The pre-add phase looks only at the rule
//! itself: required IDs, the transfer type and the four timing fields. The
//! post-add phase needs the schedule's stops: both IDs must resolve, and the
//! distance between the stops is checked against the declared transfer
//! time. Post-add checks only run when the pre-add phase found the rule
//! structurally sound.
//!
//! Validation never mutates the rule and never stops at the first finding;
//! everything goes to the [`ProblemReporter`].

mod config;
mod post_add;
mod pre_add;


pub use config::{ConfigError, ValidationConfig};
pub use post_add::transfer_distance;

use tracing::trace;

use crate::domain::TransferRule;
use crate::problems::ProblemReporter;
use crate::schedule::StopDirectory;

/// Validates transfer rules against a fixed set of thresholds.
#[derive(Debug, Clone, Default)]
pub struct TransferValidator {
    config: ValidationConfig,
}

impl TransferValidator {
    /// Create a validator, rejecting inconsistent thresholds.
    pub fn new(config: ValidationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Run the self-contained checks.
    ///
    /// Returns false if the rule is structurally unsound: a stop ID is
    /// missing, the transfer type is invalid, or a timing field is not an
    /// integer. Range warnings and errors do not make it false.
    pub fn validate_before_add<P: ProblemReporter + ?Sized>(
        &self,
        rule: &TransferRule,
        reporter: &mut P,
    ) -> bool {
        pre_add::validate_before_add(&self.config, rule, reporter)
    }

    /// Run the checks that need the schedule's stops.
    pub fn validate_after_add<S, P>(&self, rule: &TransferRule, stops: &S, reporter: &mut P)
    where
        S: StopDirectory + ?Sized,
        P: ProblemReporter + ?Sized,
    {
        post_add::validate_after_add(&self.config, rule, stops, reporter);
    }

    /// Run every applicable check.
    ///
    /// Stop-dependent checks run only when `stops` is given and the
    /// self-contained checks passed. Outcomes are observable only through
    /// the reporter.
    pub fn validate<P: ProblemReporter + ?Sized>(
        &self,
        rule: &TransferRule,
        stops: Option<&dyn StopDirectory>,
        reporter: &mut P,
    ) {
        let sound = self.validate_before_add(rule, reporter);
        match stops {
            Some(stops) if sound => self.validate_after_add(rule, stops, reporter),
            Some(_) => trace!(key = %rule.key(), "skipping stop checks for unsound rule"),
            None => trace!(key = %rule.key(), "no stops given, skipping stop checks"),
        }
    }
}
