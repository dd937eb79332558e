//! Per-attempt delivery outcomes
//!
//! One [`DeliveryOutcome`] is produced for every subscriber in a broadcast,
//! whatever happens to the attempt. The dispatch engine's pruning policy
//! keys off the variant alone.

use super::client::DeliveryError;

/// Outcome of one delivery attempt to one subscriber
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The relay accepted the message
    Delivered,
    /// Delivery failed but the subscription stays registered; a later
    /// broadcast retries it naturally
    TransientFailure {
        /// Failure detail
        reason: String,
    },
    /// The endpoint is gone for good; the subscription gets pruned
    PermanentFailure {
        /// Relay-supplied detail
        reason: String,
    },
}

impl DeliveryOutcome {
    /// Classify a client result into an outcome
    pub fn from_result(result: Result<(), DeliveryError>) -> Self {
        match result {
            Ok(()) => DeliveryOutcome::Delivered,
            Err(DeliveryError::EndpointGone { reason }) => {
                DeliveryOutcome::PermanentFailure { reason }
            }
            Err(DeliveryError::Retryable { reason }) => {
                DeliveryOutcome::TransientFailure { reason }
            }
        }
    }

    /// Whether the message reached the relay
    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryOutcome::Delivered)
    }

    /// Whether this outcome requires pruning the subscription
    pub fn is_permanent(&self) -> bool {
        matches!(self, DeliveryOutcome::PermanentFailure { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result_mapping() {
        assert_eq!(DeliveryOutcome::from_result(Ok(())), DeliveryOutcome::Delivered);

        let gone = DeliveryOutcome::from_result(Err(DeliveryError::gone("410 Gone")));
        assert!(gone.is_permanent());

        let transient = DeliveryOutcome::from_result(Err(DeliveryError::retryable("timeout")));
        assert!(!transient.is_permanent());
        assert!(!transient.is_delivered());
    }
}
