//! The schedule context a transfer rule is validated against.
//!
//! Validation only needs to look stops up by ID and to hand rules over for
//! registration. Both are traits so a surrounding system can plug in its
//! own storage; [`Schedule`] is a simple in-memory implementation.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{Stop, StopId, TransferKey, TransferRule};

/// Read-only lookup of stops by ID.
pub trait StopDirectory {
    /// Returns the stop with the given ID, if it exists.
    fn stop(&self, id: &str) -> Option<&Stop>;

    /// Returns true if a stop with the given ID exists.
    fn contains(&self, id: &str) -> bool {
        self.stop(id).is_some()
    }
}

impl StopDirectory for HashMap<StopId, Stop> {
    fn stop(&self, id: &str) -> Option<&Stop> {
        self.get(id)
    }
}

/// Something transfer rules can be registered with.
pub trait TransferRegistry {
    /// Take ownership of a transfer rule.
    fn add_transfer(&mut self, rule: TransferRule);
}

/// An in-memory schedule holding stops and transfer rules.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    stops: HashMap<StopId, Stop>,

    /// Rules in registration order. Several rules may share a key.
    transfers: Vec<TransferRule>,
}

impl Schedule {
    /// Create an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stop, replacing any stop with the same ID.
    pub fn add_stop(&mut self, stop: Stop) -> Option<Stop> {
        self.stops.insert(stop.id.clone(), stop)
    }

    /// All stops, in no particular order.
    pub fn stops(&self) -> impl Iterator<Item = &Stop> {
        self.stops.values()
    }

    /// All transfer rules, in registration order.
    pub fn transfers(&self) -> &[TransferRule] {
        &self.transfers
    }

    /// Rules registered under `key`, in registration order.
    pub fn transfers_for(&self, key: &TransferKey) -> impl Iterator<Item = &TransferRule> {
        self.transfers.iter().filter(move |rule| rule.key() == *key)
    }
}

impl StopDirectory for Schedule {
    fn stop(&self, id: &str) -> Option<&Stop> {
        self.stops.get(id)
    }
}

impl TransferRegistry for Schedule {
    fn add_transfer(&mut self, rule: TransferRule) {
        let key = rule.key();
        if self.transfers_for(&key).next().is_some() {
            debug!(%key, "registering additional transfer rule for existing key");
        }
        self.transfers.push(rule);
    }
}
