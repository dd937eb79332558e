//! Web push subscription registry and notification fan-out
//!
//! `push-hub` tracks the delivery targets of a web push deployment and
//! fans notifications out to all of them through a pluggable delivery
//! client, healing its registry as endpoints go stale: targets the relay
//! reports as permanently gone are pruned as a side effect of the
//! broadcast that discovered them.
//!
//! # Architecture
//!
//! ```text
//!        subscribe / unsubscribe                 send
//!                 │                               │
//!                 ▼                               ▼
//!        ┌─────────────────┐  snapshot   ┌─────────────────┐
//!        │ SubscriptionStore│◄───────────│   Dispatcher    │
//!        │  (RwLock, owned  │  prune     │ bounded fan-out │
//!        │   exclusively)   │◄───────────│ + per-attempt   │
//!        └─────────────────┘             │   timeout       │
//!                                        └────────┬────────┘
//!                                                 │ deliver(sub, payload)
//!                                                 ▼
//!                                        ┌─────────────────┐
//!                                        │ DeliveryClient  │
//!                                        │ (external push  │
//!                                        │  protocol impl) │
//!                                        └─────────────────┘
//! ```
//!
//! The crate never speaks the encrypted push protocol itself; it consumes
//! the narrow [`DeliveryClient`] capability and reacts to the classified
//! [`DeliveryOutcome`] per target. [`PushHub`] bundles the pieces behind
//! the method surface HTTP glue expects, and refuses to exist without
//! validated [`RelayKeys`].
//!
//! # Example
//!
//! ```no_run
//! use push_hub::{DispatchConfig, Notification, PushHub, RelayKeys};
//! # use bytes::Bytes;
//! # use push_hub::{DeliveryClient, DeliveryError, Subscription};
//! # struct MyRelayClient;
//! # #[async_trait::async_trait]
//! # impl DeliveryClient for MyRelayClient {
//! #     async fn deliver(&self, _s: &Subscription, _p: &Bytes) -> Result<(), DeliveryError> {
//! #         Ok(())
//! #     }
//! # }
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let keys = RelayKeys::from_env()?;
//! let hub = PushHub::new(keys, MyRelayClient, DispatchConfig::default());
//!
//! // ... register subscriptions from clients ...
//!
//! let report = hub
//!     .send(&Notification::new("Deploy finished", "All checks green"))
//!     .await?;
//! println!("delivered {}/{}", report.delivered, report.attempted);
//! # Ok(())
//! # }
//! ```

pub mod delivery;
pub mod dispatch;
pub mod error;
pub mod hub;
pub mod registry;
pub mod relay;
pub mod stats;

// ---- Public re-exports ----

pub use delivery::{DeliveryClient, DeliveryError, DeliveryOutcome};
pub use dispatch::{
    DeliveryFailure, DispatchConfig, DispatchError, DispatchReport, Dispatcher, Notification,
};
pub use error::{Error, Result};
pub use hub::PushHub;
pub use registry::{
    AddOutcome, RegistryError, RemoveOutcome, Subscription, SubscriptionKeys, SubscriptionStore,
};
pub use relay::{ConfigError, RelayKeys};
pub use stats::{HubHealth, TotalsSnapshot};
