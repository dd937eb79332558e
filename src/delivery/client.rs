//! Delivery client trait
//!
//! The dispatch engine never speaks the push protocol itself; it hands each
//! `(subscription, payload)` pair to an implementation of [`DeliveryClient`]
//! and consumes the classified result. Implementations wrap whatever relay
//! library actually encrypts and ships the message.

use async_trait::async_trait;
use bytes::Bytes;

use crate::registry::Subscription;

/// Error type for a single delivery attempt
///
/// Implementations classify transport results into these two variants at
/// the client boundary, so the engine never inspects status codes. The
/// split decides registry self-healing: a permanent error prunes the
/// subscription, a retryable one leaves it registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    /// The relay reports the endpoint will never accept delivery again
    /// (the HTTP 410 Gone / 404 Not Found class)
    EndpointGone {
        /// Relay-supplied detail
        reason: String,
    },
    /// Recoverable failure: network error, rate limiting, relay-side
    /// transient error, malformed payload
    Retryable {
        /// Failure detail
        reason: String,
    },
}

impl DeliveryError {
    /// Create a permanent "endpoint gone" error
    pub fn gone(reason: impl Into<String>) -> Self {
        DeliveryError::EndpointGone {
            reason: reason.into(),
        }
    }

    /// Create a retryable error
    pub fn retryable(reason: impl Into<String>) -> Self {
        DeliveryError::Retryable {
            reason: reason.into(),
        }
    }

    /// Whether this error means the endpoint is gone for good
    pub fn is_permanent(&self) -> bool {
        matches!(self, DeliveryError::EndpointGone { .. })
    }
}

impl std::fmt::Display for DeliveryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeliveryError::EndpointGone { reason } => write!(f, "Endpoint gone: {}", reason),
            DeliveryError::Retryable { reason } => write!(f, "Delivery failed: {}", reason),
        }
    }
}

impl std::error::Error for DeliveryError {}

/// Capability to push one payload to one subscriber
///
/// ### Implementation requirements
/// - Perform the encrypted push protocol against the relay; the payload
///   arrives already serialized.
/// - Classify the result once: return `DeliveryError::EndpointGone` only
///   for the relay's "gone forever" status class, `Retryable` for
///   everything else.
/// - Do not retry internally; the caller decides retry policy.
/// - Implementations are called concurrently and must be safe to share.
#[async_trait]
pub trait DeliveryClient: Send + Sync + 'static {
    /// Attempt delivery of `payload` to `subscription`
    async fn deliver(&self, subscription: &Subscription, payload: &Bytes)
        -> Result<(), DeliveryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permanence_classification() {
        assert!(DeliveryError::gone("410 Gone").is_permanent());
        assert!(!DeliveryError::retryable("429 Too Many Requests").is_permanent());
    }
}
