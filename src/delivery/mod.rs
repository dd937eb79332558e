//! Delivery client boundary
//!
//! The narrow contract between the dispatch engine and whatever library
//! performs the actual encrypted push delivery. The engine depends only on
//! [`DeliveryClient`] and the tagged [`DeliveryOutcome`]; transport details
//! (HTTP status codes, relay quirks) stay inside client implementations.

pub mod client;
pub mod outcome;

pub use client::{DeliveryClient, DeliveryError};
pub use outcome::DeliveryOutcome;
