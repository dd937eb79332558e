//! Subscription record types
//!
//! This module defines the per-subscriber data stored in the registry.
//! The shapes mirror the JSON a browser produces from
//! `PushSubscription.toJSON()`, so records deserialize straight off the wire.

use serde::{Deserialize, Serialize};

/// Longest endpoint prefix that may appear in logs and reports
pub const ENDPOINT_PREFIX_LEN: usize = 50;

/// Truncated display form of an endpoint
///
/// Full endpoint URLs are capability-bearing relay secrets; everything
/// user-visible (logs, dispatch reports) carries this prefix instead.
pub fn endpoint_prefix(endpoint: &str) -> String {
    if endpoint.chars().count() <= ENDPOINT_PREFIX_LEN {
        endpoint.to_string()
    } else {
        let prefix: String = endpoint.chars().take(ENDPOINT_PREFIX_LEN).collect();
        format!("{prefix}...")
    }
}

/// Cryptographic material negotiated between the client and the push relay.
///
/// The registry stores and forwards this bundle verbatim; only a delivery
/// client implementation ever interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionKeys {
    /// Client public key (P-256, base64url)
    pub p256dh: String,
    /// Authentication secret (base64url)
    pub auth: String,
}

impl SubscriptionKeys {
    /// Create a new key bundle
    pub fn new(p256dh: impl Into<String>, auth: impl Into<String>) -> Self {
        Self {
            p256dh: p256dh.into(),
            auth: auth.into(),
        }
    }
}

/// A registered delivery target
///
/// The `endpoint` is the relay-assigned URL that uniquely identifies the
/// subscription; it acts as the primary key in the registry. A changed
/// subscription never updates in place — clients re-subscribe, which shows
/// up here as a remove followed by an add under a new endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    /// Relay-assigned endpoint URL; unique per subscription
    pub endpoint: String,
    /// Opaque key material required by the delivery client
    pub keys: SubscriptionKeys,
}

impl Subscription {
    /// Create a new subscription record
    pub fn new(endpoint: impl Into<String>, keys: SubscriptionKeys) -> Self {
        Self {
            endpoint: endpoint.into(),
            keys,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_prefix_short_endpoint_unchanged() {
        assert_eq!(endpoint_prefix("https://push.example.org/x"), "https://push.example.org/x");
    }

    #[test]
    fn test_endpoint_prefix_never_reveals_long_endpoint() {
        let endpoint = format!("https://push.example.org/send/{}", "a".repeat(80));

        let prefix = endpoint_prefix(&endpoint);

        assert_ne!(prefix, endpoint);
        assert_eq!(prefix.chars().count(), ENDPOINT_PREFIX_LEN + 3);
        assert!(prefix.ends_with("..."));
    }

    #[test]
    fn test_wire_format_round_trip() {
        let json = r#"{
            "endpoint": "https://push.example.org/send/abc123",
            "keys": { "p256dh": "BPubKey", "auth": "authsecret" }
        }"#;

        let sub: Subscription = serde_json::from_str(json).unwrap();
        assert_eq!(sub.endpoint, "https://push.example.org/send/abc123");
        assert_eq!(sub.keys.p256dh, "BPubKey");
        assert_eq!(sub.keys.auth, "authsecret");

        let out = serde_json::to_value(&sub).unwrap();
        assert_eq!(out["keys"]["auth"], "authsecret");
    }
}
