//! Dispatch engine implementation
//!
//! Fans one notification out to every subscription in a registry snapshot
//! and applies the self-healing policy: endpoints the relay reports as
//! permanently gone are pruned from the registry as a side effect of the
//! broadcast.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::delivery::{DeliveryClient, DeliveryOutcome};
use crate::registry::{endpoint_prefix, SubscriptionStore};
use crate::stats::{DispatchTotals, TotalsSnapshot};

use super::config::DispatchConfig;
use super::error::DispatchError;
use super::payload::Notification;
use super::report::{DeliveryFailure, DispatchReport};

/// Notification fan-out engine
///
/// Every delivery attempt runs in its own task, bounded by an optional
/// semaphore and a per-attempt timeout. One subscriber's failure never
/// aborts delivery to the others; each attempt resolves to exactly one
/// [`DeliveryOutcome`].
pub struct Dispatcher<C> {
    registry: Arc<SubscriptionStore>,
    client: Arc<C>,
    config: DispatchConfig,
    semaphore: Option<Arc<Semaphore>>,
    totals: DispatchTotals,
}

impl<C: DeliveryClient> Dispatcher<C> {
    /// Create a dispatcher over a registry and delivery client
    pub fn new(registry: Arc<SubscriptionStore>, client: C, config: DispatchConfig) -> Self {
        let semaphore = if config.max_concurrent > 0 {
            Some(Arc::new(Semaphore::new(config.max_concurrent)))
        } else {
            None
        };

        Self {
            registry,
            client: Arc::new(client),
            config,
            semaphore,
            totals: DispatchTotals::new(),
        }
    }

    /// Get the dispatch configuration
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Running totals across all broadcasts of this dispatcher
    pub fn totals(&self) -> TotalsSnapshot {
        self.totals.snapshot()
    }

    /// Broadcast a notification to every current subscription
    ///
    /// Fails fast with [`DispatchError::NoSubscribers`] on an empty
    /// registry; no delivery attempt is made in that case.
    pub async fn broadcast(
        &self,
        notification: &Notification,
    ) -> Result<DispatchReport, DispatchError> {
        self.broadcast_with_deadline(notification, None).await
    }

    /// Broadcast with an overall deadline
    ///
    /// When the deadline expires, in-flight attempts are abandoned and
    /// reported as transient failures; outcomes that already completed are
    /// honored, including any pruning they earned.
    pub async fn broadcast_with_deadline(
        &self,
        notification: &Notification,
        deadline: Option<Duration>,
    ) -> Result<DispatchReport, DispatchError> {
        let snapshot = self.registry.snapshot().await;
        if snapshot.is_empty() {
            return Err(DispatchError::NoSubscribers);
        }

        let payload = notification
            .to_bytes()
            .map_err(|e| DispatchError::Payload(e.to_string()))?;
        let attempted = snapshot.len();

        tracing::debug!(subscriptions = attempted, "Broadcast starting");

        let mut attempts: JoinSet<(usize, DeliveryOutcome)> = JoinSet::new();
        for (idx, subscription) in snapshot.iter().enumerate() {
            let subscription = subscription.clone();
            let client = Arc::clone(&self.client);
            let payload = payload.clone();
            let semaphore = self.semaphore.clone();
            let attempt_timeout = self.config.attempt_timeout;

            attempts.spawn(async move {
                let _permit = match semaphore {
                    Some(sem) => match sem.acquire_owned().await {
                        Ok(permit) => Some(permit),
                        Err(_) => {
                            return (
                                idx,
                                DeliveryOutcome::TransientFailure {
                                    reason: "concurrency limiter closed".to_string(),
                                },
                            );
                        }
                    },
                    None => None,
                };

                let outcome = match tokio::time::timeout(
                    attempt_timeout,
                    client.deliver(&subscription, &payload),
                )
                .await
                {
                    Ok(result) => DeliveryOutcome::from_result(result),
                    Err(_) => DeliveryOutcome::TransientFailure {
                        reason: format!("timed out after {:?}", attempt_timeout),
                    },
                };

                tracing::debug!(
                    endpoint = %endpoint_prefix(&subscription.endpoint),
                    delivered = outcome.is_delivered(),
                    "Delivery attempt finished"
                );

                (idx, outcome)
            });
        }

        // Outcomes are slotted by snapshot index so the report stays in
        // snapshot order regardless of completion order.
        let mut outcomes: Vec<Option<DeliveryOutcome>> = vec![None; attempted];

        match deadline {
            Some(limit) => {
                if tokio::time::timeout(limit, drain(&mut attempts, &mut outcomes))
                    .await
                    .is_err()
                {
                    let abandoned = outcomes.iter().filter(|slot| slot.is_none()).count();
                    attempts.abort_all();
                    tracing::warn!(
                        abandoned,
                        "Broadcast deadline exceeded, abandoning in-flight deliveries"
                    );
                }
            }
            None => drain(&mut attempts, &mut outcomes).await,
        }

        let mut report = DispatchReport {
            attempted,
            ..Default::default()
        };

        for (subscription, slot) in snapshot.iter().zip(outcomes) {
            let outcome = slot.unwrap_or(DeliveryOutcome::TransientFailure {
                reason: "abandoned before completion".to_string(),
            });

            match outcome {
                DeliveryOutcome::Delivered => report.delivered += 1,
                DeliveryOutcome::PermanentFailure { reason } => {
                    self.registry.remove(&subscription.endpoint).await;
                    report.pruned += 1;
                    tracing::info!(
                        endpoint = %endpoint_prefix(&subscription.endpoint),
                        reason = %reason,
                        "Subscription pruned after permanent failure"
                    );
                    report.failures.push(DeliveryFailure {
                        endpoint: endpoint_prefix(&subscription.endpoint),
                        reason,
                        pruned: true,
                    });
                }
                DeliveryOutcome::TransientFailure { reason } => {
                    report.failures.push(DeliveryFailure {
                        endpoint: endpoint_prefix(&subscription.endpoint),
                        reason,
                        pruned: false,
                    });
                }
            }
        }

        self.totals.record(&report);

        tracing::info!(
            attempted = report.attempted,
            delivered = report.delivered,
            pruned = report.pruned,
            failed = report.failed(),
            "Broadcast complete"
        );

        Ok(report)
    }
}

/// Collect attempt results into their slots as they complete
///
/// A panicked attempt loses only its own slot; the remaining attempts
/// still drain.
async fn drain(
    attempts: &mut JoinSet<(usize, DeliveryOutcome)>,
    outcomes: &mut [Option<DeliveryOutcome>],
) {
    while let Some(joined) = attempts.join_next().await {
        match joined {
            Ok((idx, outcome)) => {
                if let Some(slot) = outcomes.get_mut(idx) {
                    *slot = Some(outcome);
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "Delivery task failed");
            }
        }
    }
}
