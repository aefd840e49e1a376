//! Correlation-based result delivery.
//!
//! A [`CorrelationRegistry`] lets one execution context register interest in
//! a result identified by a [`CorrelationId`] while another, independent
//! context later produces that result and hands it to exactly the waiter
//! that asked for it. Each registration owns a single-capacity slot; the
//! slot is resolved exactly once, either by [`CorrelationRegistry::deliver`]
//! or by cancellation.
//!
//! ```text
//! Unregistered --register--> Pending --deliver--> Delivered
//!                            Pending --unregister/cancel--> Canceled
//! ```
//!
//! Registries are owned by the subsystem that uses them. Several registries
//! for different payload types may coexist.

mod config;
mod error;
mod id;
mod outcome;
mod registry;
mod reply;

pub use config::{DuplicatePolicy, RegistryConfig};
pub use error::{CorrelationIdError, RegistryError};
pub use id::CorrelationId;
pub use outcome::ReplyOutcome;
pub use registry::CorrelationRegistry;
pub use reply::PendingReply;

#[cfg(test)]
mod tests;
