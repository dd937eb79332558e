//! End-to-end push hub walkthrough
//!
//! Run with: cargo run --example send_demo
//!
//! Builds a hub around a fake delivery client, registers a few
//! subscriptions, broadcasts one notification and prints the report. The
//! fake client delivers to most endpoints but reports one as gone, so the
//! demo also shows the registry pruning itself.
//!
//! Set RUST_LOG=push_hub=debug to watch individual delivery attempts.

use bytes::Bytes;
use push_hub::registry::endpoint_prefix;
use push_hub::{
    DeliveryClient, DeliveryError, DispatchConfig, Notification, PushHub, RelayKeys, Subscription,
    SubscriptionKeys,
};

/// Fake relay client: endpoints containing "expired" are reported gone,
/// everything else delivers
struct DemoRelayClient;

#[async_trait::async_trait]
impl DeliveryClient for DemoRelayClient {
    async fn deliver(
        &self,
        subscription: &Subscription,
        payload: &Bytes,
    ) -> Result<(), DeliveryError> {
        if subscription.endpoint.contains("expired") {
            return Err(DeliveryError::gone("410 Gone"));
        }

        println!(
            "  -> delivered {} bytes to {}",
            payload.len(),
            endpoint_prefix(&subscription.endpoint)
        );
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("push_hub=info".parse()?),
        )
        .init();

    // Real deployments load these from the environment via
    // RelayKeys::from_env(); the demo uses placeholders.
    let keys = RelayKeys::new("mailto:demo@example.org", "BDemoPublicKey", "demo-private-key")?;
    let hub = PushHub::new(keys, DemoRelayClient, DispatchConfig::default());

    println!("Relay public key: {}", hub.public_key());

    for endpoint in [
        "https://push.example.org/send/alice-device-1",
        "https://push.example.org/send/bob-phone",
        "https://push.example.org/send/expired-laptop",
    ] {
        let outcome = hub
            .subscribe(Subscription::new(
                endpoint,
                SubscriptionKeys::new("BClientPublicKey", "client-auth-secret"),
            ))
            .await?;
        println!("subscribed {} (total: {})", endpoint, outcome.total());
    }

    let notification = Notification::new("Deploy finished", "All checks green")
        .icon("/icon-192x192.png")
        .data(serde_json::json!({ "url": "https://app.example.org/deploys/42" }));

    println!("\nbroadcasting...");
    let report = hub.send(&notification).await?;

    println!(
        "\nattempted: {}, delivered: {}, pruned: {}",
        report.attempted, report.delivered, report.pruned
    );
    for failure in &report.failures {
        println!(
            "  failed: {} ({}){}",
            failure.endpoint,
            failure.reason,
            if failure.pruned { " [pruned]" } else { "" }
        );
    }

    let health = hub.health().await;
    println!("\nsubscriptions remaining: {}", health.subscriptions);

    Ok(())
}
