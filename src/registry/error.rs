//! Registry error types
//!
//! Error types for subscription registry operations.

/// Error type for registry operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Subscription record carries an empty endpoint
    EmptyEndpoint,
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::EmptyEndpoint => write!(f, "Subscription endpoint is empty"),
        }
    }
}

impl std::error::Error for RegistryError {}
