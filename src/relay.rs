//! Relay credential configuration
//!
//! The VAPID key pair and subject that identify this server to the push
//! relay. Everything that can deliver a notification is constructed from a
//! validated [`RelayKeys`], so missing credentials stop the system at
//! startup rather than at the first broadcast.

use std::env;

/// Environment variable holding the public VAPID key
pub const ENV_PUBLIC_KEY: &str = "PUBLIC_VAPID_KEY";
/// Environment variable holding the private VAPID key
pub const ENV_PRIVATE_KEY: &str = "PRIVATE_VAPID_KEY";
/// Environment variable holding the VAPID subject (`mailto:` or URL)
pub const ENV_SUBJECT: &str = "VAPID_SUBJECT";

const DEFAULT_SUBJECT: &str = "mailto:test@example.com";

/// Error type for relay configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required credential is missing or empty
    MissingKey(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingKey(name) => write!(f, "Missing relay credential: {}", name),
        }
    }
}

impl std::error::Error for ConfigError {}

/// VAPID credential bundle for the delivery relay
///
/// The private key never appears in `Debug` output or logs.
#[derive(Clone, PartialEq, Eq)]
pub struct RelayKeys {
    subject: String,
    public_key: String,
    private_key: String,
}

impl RelayKeys {
    /// Create a validated credential bundle
    pub fn new(
        subject: impl Into<String>,
        public_key: impl Into<String>,
        private_key: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let subject = subject.into();
        let public_key = public_key.into();
        let private_key = private_key.into();

        if subject.is_empty() {
            return Err(ConfigError::MissingKey("subject"));
        }
        if public_key.is_empty() {
            return Err(ConfigError::MissingKey("public key"));
        }
        if private_key.is_empty() {
            return Err(ConfigError::MissingKey("private key"));
        }

        Ok(Self {
            subject,
            public_key,
            private_key,
        })
    }

    /// Load credentials from the environment
    ///
    /// Reads `PUBLIC_VAPID_KEY`, `PRIVATE_VAPID_KEY` and `VAPID_SUBJECT`;
    /// the subject falls back to a placeholder `mailto:` address when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let public_key = env::var(ENV_PUBLIC_KEY).unwrap_or_default();
        let private_key = env::var(ENV_PRIVATE_KEY).unwrap_or_default();
        let subject = env::var(ENV_SUBJECT).unwrap_or_else(|_| DEFAULT_SUBJECT.to_string());

        Self::new(subject, public_key, private_key)
    }

    /// VAPID subject identifying the sender
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Public key clients use to negotiate subscriptions
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Private key for delivery client implementations
    pub fn private_key(&self) -> &str {
        &self.private_key
    }
}

impl std::fmt::Debug for RelayKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayKeys")
            .field("subject", &self.subject)
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_missing_credentials() {
        assert_eq!(
            RelayKeys::new("mailto:a@b.c", "", "priv"),
            Err(ConfigError::MissingKey("public key"))
        );
        assert_eq!(
            RelayKeys::new("mailto:a@b.c", "pub", ""),
            Err(ConfigError::MissingKey("private key"))
        );
        assert_eq!(
            RelayKeys::new("", "pub", "priv"),
            Err(ConfigError::MissingKey("subject"))
        );
    }

    #[test]
    fn test_valid_keys_expose_accessors() {
        let keys = RelayKeys::new("mailto:ops@example.org", "BPubKey", "priv").unwrap();

        assert_eq!(keys.subject(), "mailto:ops@example.org");
        assert_eq!(keys.public_key(), "BPubKey");
        assert_eq!(keys.private_key(), "priv");
    }

    #[test]
    fn test_debug_redacts_private_key() {
        let keys = RelayKeys::new("mailto:ops@example.org", "BPubKey", "supersecret").unwrap();

        let debug = format!("{:?}", keys);
        assert!(!debug.contains("supersecret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_from_env_requires_both_keys() {
        // Single test covers both env paths so parallel tests never race
        // on these variables.
        env::remove_var(ENV_PUBLIC_KEY);
        env::remove_var(ENV_PRIVATE_KEY);
        env::remove_var(ENV_SUBJECT);

        assert!(RelayKeys::from_env().is_err());

        env::set_var(ENV_PUBLIC_KEY, "BPubKey");
        env::set_var(ENV_PRIVATE_KEY, "priv");

        let keys = RelayKeys::from_env().unwrap();
        assert_eq!(keys.public_key(), "BPubKey");
        assert_eq!(keys.subject(), "mailto:test@example.com");

        env::remove_var(ENV_PUBLIC_KEY);
        env::remove_var(ENV_PRIVATE_KEY);
    }
}
