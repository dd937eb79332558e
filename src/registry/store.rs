//! Subscription store implementation
//!
//! The central registry that tracks every active delivery target. All
//! mutation goes through this type; the dispatch engine only ever sees
//! point-in-time snapshots.

use tokio::sync::RwLock;

use super::error::RegistryError;
use super::record::{endpoint_prefix, Subscription};

/// Result of an add operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The record was inserted
    Inserted {
        /// Subscriber count after the insert
        total: usize,
    },
    /// A record with the same endpoint already exists; the call changed nothing
    AlreadyPresent {
        /// Current subscriber count
        total: usize,
    },
}

impl AddOutcome {
    /// Subscriber count observed by this call
    pub fn total(&self) -> usize {
        match self {
            AddOutcome::Inserted { total } | AddOutcome::AlreadyPresent { total } => *total,
        }
    }

    /// Whether the record was actually inserted
    pub fn is_inserted(&self) -> bool {
        matches!(self, AddOutcome::Inserted { .. })
    }
}

/// Result of a remove operation
///
/// Absence of a matching record is an expected outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The matching record was removed
    Removed {
        /// Subscriber count after the removal
        total: usize,
    },
    /// No record matched the endpoint
    NotFound {
        /// Current subscriber count
        total: usize,
    },
}

impl RemoveOutcome {
    /// Subscriber count observed by this call
    pub fn total(&self) -> usize {
        match self {
            RemoveOutcome::Removed { total } | RemoveOutcome::NotFound { total } => *total,
        }
    }

    /// Whether a record was actually removed
    pub fn is_removed(&self) -> bool {
        matches!(self, RemoveOutcome::Removed { .. })
    }
}

/// Registry of active subscriptions
///
/// Thread-safe via `RwLock`; `add`, `remove` and `snapshot` may be called
/// concurrently from any number of tasks. The backing `Vec` preserves
/// insertion order, which makes snapshots (and therefore dispatch reports)
/// stable, but callers must not attach meaning to that order.
pub struct SubscriptionStore {
    subscriptions: RwLock<Vec<Subscription>>,
}

impl SubscriptionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            subscriptions: RwLock::new(Vec::new()),
        }
    }

    /// Register a subscription
    ///
    /// Idempotent by endpoint: if a record with the same endpoint is already
    /// present the call is a no-op and the existing record keeps its keys.
    /// Returns an error only for a record with an empty endpoint.
    pub async fn add(&self, subscription: Subscription) -> Result<AddOutcome, RegistryError> {
        if subscription.endpoint.is_empty() {
            return Err(RegistryError::EmptyEndpoint);
        }

        let mut subs = self.subscriptions.write().await;

        if subs.iter().any(|s| s.endpoint == subscription.endpoint) {
            tracing::debug!(
                endpoint = %endpoint_prefix(&subscription.endpoint),
                total = subs.len(),
                "Subscription already registered"
            );
            return Ok(AddOutcome::AlreadyPresent { total: subs.len() });
        }

        tracing::info!(
            endpoint = %endpoint_prefix(&subscription.endpoint),
            total = subs.len() + 1,
            "Subscription added"
        );
        subs.push(subscription);

        Ok(AddOutcome::Inserted { total: subs.len() })
    }

    /// Remove the subscription matching `endpoint`
    pub async fn remove(&self, endpoint: &str) -> RemoveOutcome {
        let mut subs = self.subscriptions.write().await;

        if let Some(pos) = subs.iter().position(|s| s.endpoint == endpoint) {
            subs.remove(pos);
            tracing::info!(
                endpoint = %endpoint_prefix(endpoint),
                total = subs.len(),
                "Subscription removed"
            );
            RemoveOutcome::Removed { total: subs.len() }
        } else {
            tracing::debug!(
                endpoint = %endpoint_prefix(endpoint),
                total = subs.len(),
                "Subscription not found"
            );
            RemoveOutcome::NotFound { total: subs.len() }
        }
    }

    /// Take a point-in-time copy of all subscriptions, in insertion order
    ///
    /// The copy is immutable: subscriptions added or removed afterwards do
    /// not show up in it.
    pub async fn snapshot(&self) -> Vec<Subscription> {
        self.subscriptions.read().await.clone()
    }

    /// Number of tracked subscriptions
    pub async fn count(&self) -> usize {
        self.subscriptions.read().await.len()
    }

    /// Check whether a subscription with this endpoint is registered
    pub async fn contains(&self, endpoint: &str) -> bool {
        self.subscriptions
            .read()
            .await
            .iter()
            .any(|s| s.endpoint == endpoint)
    }
}

impl Default for SubscriptionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::registry::record::SubscriptionKeys;

    fn sub(endpoint: &str) -> Subscription {
        Subscription::new(endpoint, SubscriptionKeys::new("BPubKey", "secret"))
    }

    #[tokio::test]
    async fn test_add_is_idempotent_by_endpoint() {
        let store = SubscriptionStore::new();

        let first = store.add(sub("https://push.example.org/a")).await.unwrap();
        assert!(first.is_inserted());
        assert_eq!(first.total(), 1);

        // Same endpoint again: no-op, same total
        let second = store.add(sub("https://push.example.org/a")).await.unwrap();
        assert!(!second.is_inserted());
        assert_eq!(second.total(), 1);
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn test_duplicate_add_keeps_original_keys() {
        let store = SubscriptionStore::new();

        store.add(sub("https://push.example.org/a")).await.unwrap();

        let replacement = Subscription::new(
            "https://push.example.org/a",
            SubscriptionKeys::new("BOtherKey", "other"),
        );
        store.add(replacement).await.unwrap();

        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].keys.p256dh, "BPubKey");
    }

    #[tokio::test]
    async fn test_add_then_remove_restores_count() {
        let store = SubscriptionStore::new();
        store.add(sub("https://push.example.org/a")).await.unwrap();

        store.add(sub("https://push.example.org/b")).await.unwrap();
        let removed = store.remove("https://push.example.org/b").await;

        assert!(removed.is_removed());
        assert_eq!(removed.total(), 1);
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn test_remove_unknown_endpoint() {
        let store = SubscriptionStore::new();
        store.add(sub("https://push.example.org/a")).await.unwrap();

        let outcome = store.remove("https://push.example.org/never-added").await;

        assert!(matches!(outcome, RemoveOutcome::NotFound { total: 1 }));
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn test_rejects_empty_endpoint() {
        let store = SubscriptionStore::new();

        let result = store
            .add(Subscription::new("", SubscriptionKeys::new("k", "a")))
            .await;

        assert_eq!(result, Err(RegistryError::EmptyEndpoint));
        assert_eq!(store.count().await, 0);
    }

    #[tokio::test]
    async fn test_snapshot_is_point_in_time() {
        let store = SubscriptionStore::new();
        store.add(sub("https://push.example.org/a")).await.unwrap();

        let snapshot = store.snapshot().await;
        store.add(sub("https://push.example.org/b")).await.unwrap();

        // The earlier snapshot does not see the later add
        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.count().await, 2);
    }

    #[tokio::test]
    async fn test_snapshot_preserves_insertion_order() {
        let store = SubscriptionStore::new();
        store.add(sub("https://push.example.org/a")).await.unwrap();
        store.add(sub("https://push.example.org/b")).await.unwrap();
        store.add(sub("https://push.example.org/c")).await.unwrap();

        let snapshot = store.snapshot().await;
        let endpoints: Vec<&str> = snapshot.iter().map(|s| s.endpoint.as_str()).collect();
        assert_eq!(
            endpoints,
            vec![
                "https://push.example.org/a",
                "https://push.example.org/b",
                "https://push.example.org/c",
            ]
        );
    }

    #[tokio::test]
    async fn test_concurrent_adds_never_duplicate() {
        let store = Arc::new(SubscriptionStore::new());

        let mut handles = Vec::new();
        for _ in 0..16 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.add(sub("https://push.example.org/same")).await
            }));
        }

        let mut inserted = 0;
        for handle in handles {
            if handle.await.unwrap().unwrap().is_inserted() {
                inserted += 1;
            }
        }

        assert_eq!(inserted, 1);
        assert_eq!(store.count().await, 1);
    }
}
