//! Notification payload types
//!
//! The payload a broadcast pushes to every subscriber. The JSON shape is
//! what notification-displaying clients expect; the `data` field rides
//! along untouched for client-side routing (URLs, timestamps, app state).

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A notification message to fan out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Notification title
    pub title: String,
    /// Notification body text
    pub body: String,
    /// Icon URL shown with the notification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Badge URL for platforms that support it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    /// Arbitrary auxiliary data forwarded to the client
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl Notification {
    /// Create a notification with title and body
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            icon: None,
            badge: None,
            data: None,
        }
    }

    /// Set the icon URL
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the badge URL
    pub fn badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    /// Attach auxiliary data
    pub fn data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Serialize to the wire payload
    ///
    /// Called once per broadcast; every delivery attempt shares the same
    /// `Bytes` allocation via reference counting.
    pub fn to_bytes(&self) -> Result<Bytes, serde_json::Error> {
        Ok(Bytes::from(serde_json::to_vec(self)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_payload_omits_optional_fields() {
        let notification = Notification::new("Hello", "World");

        let json: serde_json::Value =
            serde_json::from_slice(&notification.to_bytes().unwrap()).unwrap();

        assert_eq!(json["title"], "Hello");
        assert_eq!(json["body"], "World");
        assert!(json.get("icon").is_none());
        assert!(json.get("badge").is_none());
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_full_payload_shape() {
        let notification = Notification::new("Deploy finished", "All checks green")
            .icon("/icon-192x192.png")
            .badge("/icon-192x192.png")
            .data(serde_json::json!({ "url": "https://app.example.org", "timestamp": 1700000000 }));

        let json: serde_json::Value =
            serde_json::from_slice(&notification.to_bytes().unwrap()).unwrap();

        assert_eq!(json["icon"], "/icon-192x192.png");
        assert_eq!(json["data"]["url"], "https://app.example.org");
    }
}
