//! Push hub facade
//!
//! Ties the registry, dispatch engine and relay credentials into one
//! object whose methods mirror the HTTP glue contract: subscribe,
//! unsubscribe, send, key distribution and health. Transport wiring stays
//! outside the crate; handlers call straight through to these methods.

use std::sync::Arc;
use std::time::Duration;

use crate::delivery::DeliveryClient;
use crate::dispatch::{DispatchConfig, DispatchReport, Dispatcher, Notification};
use crate::error::Result;
use crate::registry::{AddOutcome, RegistryError, RemoveOutcome, Subscription, SubscriptionStore};
use crate::relay::RelayKeys;
use crate::stats::HubHealth;

/// Subscription and notification service
///
/// Construction requires a validated [`RelayKeys`] bundle, so a deployment
/// without relay credentials fails before it can accept a single request.
pub struct PushHub<C> {
    registry: Arc<SubscriptionStore>,
    dispatcher: Dispatcher<C>,
    keys: RelayKeys,
}

impl<C: DeliveryClient> PushHub<C> {
    /// Create a hub with a fresh registry
    pub fn new(keys: RelayKeys, client: C, config: DispatchConfig) -> Self {
        let registry = Arc::new(SubscriptionStore::new());
        let dispatcher = Dispatcher::new(Arc::clone(&registry), client, config);

        Self {
            registry,
            dispatcher,
            keys,
        }
    }

    /// Register a subscription; idempotent by endpoint
    pub async fn subscribe(&self, subscription: Subscription) -> Result<AddOutcome> {
        Ok(self.registry.add(subscription).await?)
    }

    /// Remove a subscription by endpoint
    ///
    /// An empty endpoint is rejected as invalid input; an unknown endpoint
    /// reports [`RemoveOutcome::NotFound`] without failing.
    pub async fn unsubscribe(&self, endpoint: &str) -> Result<RemoveOutcome> {
        if endpoint.is_empty() {
            return Err(RegistryError::EmptyEndpoint.into());
        }

        Ok(self.registry.remove(endpoint).await)
    }

    /// Broadcast a notification to every subscriber
    pub async fn send(&self, notification: &Notification) -> Result<DispatchReport> {
        Ok(self.dispatcher.broadcast(notification).await?)
    }

    /// Broadcast with an overall deadline
    pub async fn send_with_deadline(
        &self,
        notification: &Notification,
        deadline: Duration,
    ) -> Result<DispatchReport> {
        Ok(self
            .dispatcher
            .broadcast_with_deadline(notification, Some(deadline))
            .await?)
    }

    /// Public key clients need to negotiate subscriptions with the relay
    pub fn public_key(&self) -> &str {
        self.keys.public_key()
    }

    /// Health summary for monitoring
    pub async fn health(&self) -> HubHealth {
        HubHealth {
            subscriptions: self.registry.count().await,
            // Credentials are validated at construction, so a running hub
            // is always configured.
            relay_configured: true,
            totals: self.dispatcher.totals(),
        }
    }

    /// Get a reference to the subscription registry
    pub fn registry(&self) -> &Arc<SubscriptionStore> {
        &self.registry
    }
}
