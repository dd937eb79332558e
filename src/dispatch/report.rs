//! Dispatch report types
//!
//! The aggregated result a broadcast hands back to its caller.

use serde::Serialize;

/// One failed delivery attempt within a broadcast
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryFailure {
    /// Truncated endpoint prefix; never the full endpoint URL
    pub endpoint: String,
    /// Failure detail
    pub reason: String,
    /// Whether the subscription was pruned as a result
    pub pruned: bool,
}

/// Aggregated result of one broadcast
///
/// Rows in `failures` follow registry snapshot order, so the report is
/// stable for a given call even though deliveries complete in any order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DispatchReport {
    /// Number of subscriptions in the snapshot
    pub attempted: usize,
    /// Deliveries the relay accepted
    pub delivered: usize,
    /// Subscriptions removed after a permanent failure
    pub pruned: usize,
    /// Every failed attempt, pruned or retained
    pub failures: Vec<DeliveryFailure>,
}

impl DispatchReport {
    /// Number of failed attempts
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Whether every attempt succeeded
    pub fn all_delivered(&self) -> bool {
        self.delivered == self.attempted
    }
}
