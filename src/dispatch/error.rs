//! Dispatch error types
//!
//! Error types for broadcast operations.

/// Error type for dispatch operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The registry holds no subscriptions; nothing was attempted
    NoSubscribers,
    /// The notification payload could not be serialized
    Payload(String),
}

impl std::fmt::Display for DispatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchError::NoSubscribers => write!(f, "No subscriptions registered"),
            DispatchError::Payload(reason) => {
                write!(f, "Payload serialization failed: {}", reason)
            }
        }
    }
}

impl std::error::Error for DispatchError {}
