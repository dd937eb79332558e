//! Dispatch statistics
//!
//! Running totals across broadcasts, plus the health summary the hub
//! exposes for monitoring.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::dispatch::DispatchReport;

/// Running totals across all broadcasts of one dispatcher
///
/// Counters are updated once per broadcast from the finished report;
/// relaxed ordering is enough for monitoring reads.
#[derive(Debug, Default)]
pub struct DispatchTotals {
    broadcasts: AtomicU64,
    delivered: AtomicU64,
    pruned: AtomicU64,
    transient_failures: AtomicU64,
}

impl DispatchTotals {
    /// Create zeroed totals
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one finished broadcast into the totals
    pub(crate) fn record(&self, report: &DispatchReport) {
        let transient = report.failures.iter().filter(|f| !f.pruned).count() as u64;

        self.broadcasts.fetch_add(1, Ordering::Relaxed);
        self.delivered
            .fetch_add(report.delivered as u64, Ordering::Relaxed);
        self.pruned.fetch_add(report.pruned as u64, Ordering::Relaxed);
        self.transient_failures.fetch_add(transient, Ordering::Relaxed);
    }

    /// Point-in-time copy of the counters
    pub fn snapshot(&self) -> TotalsSnapshot {
        TotalsSnapshot {
            broadcasts: self.broadcasts.load(Ordering::Relaxed),
            delivered: self.delivered.load(Ordering::Relaxed),
            pruned: self.pruned.load(Ordering::Relaxed),
            transient_failures: self.transient_failures.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of dispatch totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TotalsSnapshot {
    /// Broadcasts performed
    pub broadcasts: u64,
    /// Deliveries the relay accepted
    pub delivered: u64,
    /// Subscriptions pruned after permanent failures
    pub pruned: u64,
    /// Failures that retained their subscription
    pub transient_failures: u64,
}

/// Hub health summary
#[derive(Debug, Clone, Serialize)]
pub struct HubHealth {
    /// Currently registered subscriptions
    pub subscriptions: usize,
    /// Whether relay credentials are configured
    pub relay_configured: bool,
    /// Dispatch totals since startup
    pub totals: TotalsSnapshot,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::DeliveryFailure;

    #[test]
    fn test_new_totals_are_zero() {
        let totals = DispatchTotals::new().snapshot();

        assert_eq!(totals, TotalsSnapshot::default());
    }

    #[test]
    fn test_record_splits_pruned_from_transient() {
        let totals = DispatchTotals::new();

        totals.record(&DispatchReport {
            attempted: 4,
            delivered: 2,
            pruned: 1,
            failures: vec![
                DeliveryFailure {
                    endpoint: "https://push.example.org/gone".to_string(),
                    reason: "410 Gone".to_string(),
                    pruned: true,
                },
                DeliveryFailure {
                    endpoint: "https://push.example.org/flaky".to_string(),
                    reason: "connection reset".to_string(),
                    pruned: false,
                },
            ],
        });

        let snapshot = totals.snapshot();
        assert_eq!(snapshot.broadcasts, 1);
        assert_eq!(snapshot.delivered, 2);
        assert_eq!(snapshot.pruned, 1);
        assert_eq!(snapshot.transient_failures, 1);
    }
}
