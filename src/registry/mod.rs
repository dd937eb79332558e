//! Subscription registry
//!
//! The registry owns the set of active delivery targets. It is the only
//! piece of shared mutable state in the crate: HTTP glue adds and removes
//! subscriptions, the dispatch engine snapshots it for fan-out and prunes
//! targets the relay reports as permanently gone.
//!
//! # Architecture
//!
//! ```text
//!                   Arc<SubscriptionStore>
//!               ┌───────────────────────────┐
//!               │ RwLock<Vec<Subscription>> │
//!               │   (insertion-ordered)     │
//!               └──────────┬────────────────┘
//!                          │
//!        ┌─────────────────┼──────────────────┐
//!        │                 │                  │
//!        ▼                 ▼                  ▼
//!   [subscribe]       [broadcast]        [unsubscribe]
//!   add(record)       snapshot() ──► fan-out, then
//!                     remove(endpoint) per permanent failure
//! ```
//!
//! A snapshot is a clone taken under the read lock, so a broadcast iterates
//! a stable set while concurrent adds and prunes proceed against the live
//! store.

pub mod error;
pub mod record;
pub mod store;

pub use error::RegistryError;
pub use record::{endpoint_prefix, Subscription, SubscriptionKeys, ENDPOINT_PREFIX_LEN};
pub use store::{AddOutcome, RemoveOutcome, SubscriptionStore};
