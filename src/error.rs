//! Crate-level error type
//!
//! Module-local errors stay close to their operations; this type wraps
//! them at the hub surface so callers match on one enum.

use crate::dispatch::DispatchError;
use crate::registry::RegistryError;
use crate::relay::ConfigError;

/// Error type for hub operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The registry rejected the input
    Registry(RegistryError),
    /// The broadcast could not run
    Dispatch(DispatchError),
    /// Relay credentials are missing or invalid
    Config(ConfigError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Registry(e) => write!(f, "{}", e),
            Error::Dispatch(e) => write!(f, "{}", e),
            Error::Config(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<RegistryError> for Error {
    fn from(e: RegistryError) -> Self {
        Error::Registry(e)
    }
}

impl From<DispatchError> for Error {
    fn from(e: DispatchError) -> Self {
        Error::Dispatch(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

/// Convenience result alias for hub operations
pub type Result<T> = std::result::Result<T, Error>;
