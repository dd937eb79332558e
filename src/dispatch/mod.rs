//! Notification dispatch engine
//!
//! Given a payload and the current registry snapshot, the engine fans the
//! payload out to every subscription, collects one outcome per target, and
//! self-heals the registry by removing targets the relay reports as
//! permanently gone.
//!
//! # Architecture
//!
//! ```text
//!   broadcast(notification)
//!        │
//!        ▼
//!   registry.snapshot() ──── empty ──► Err(NoSubscribers)
//!        │
//!        ▼ serialize once (shared Bytes)
//!   ┌─────────────────────────────────────────────┐
//!   │ JoinSet: one task per subscription          │
//!   │   acquire semaphore permit (max_concurrent) │
//!   │   timeout(attempt_timeout,                  │
//!   │           client.deliver(sub, payload))     │
//!   │   ──► DeliveryOutcome                       │
//!   └──────────────────┬──────────────────────────┘
//!                      ▼ slotted by snapshot index
//!   Delivered          ──► kept, counted
//!   PermanentFailure   ──► registry.remove(endpoint), pruned
//!   TransientFailure   ──► kept, reported for caller retry
//!                      │
//!                      ▼
//!               DispatchReport
//! ```
//!
//! # Zero-Copy Design
//!
//! The payload serializes once into `bytes::Bytes`; every delivery task
//! clones the handle, not the buffer, so a broadcast to thousands of
//! subscribers shares one allocation.

pub mod config;
pub mod engine;
pub mod error;
pub mod payload;
pub mod report;

pub use config::DispatchConfig;
pub use engine::Dispatcher;
pub use error::DispatchError;
pub use payload::Notification;
pub use report::{DeliveryFailure, DispatchReport};
