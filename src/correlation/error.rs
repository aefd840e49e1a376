//! Error types for correlation identifiers and registrations.

use super::CorrelationId;
use thiserror::Error;

/// Errors returned while constructing a [`CorrelationId`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CorrelationIdError {
    /// The identifier is the empty string.
    #[error("correlation id must not be empty")]
    Empty,
}

/// Errors returned by [`super::CorrelationRegistry::register`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A registration for the identifier is still pending and the registry
    /// is configured with [`super::DuplicatePolicy::Reject`].
    #[error("correlation id {0} already has a pending registration")]
    DuplicateRegistration(CorrelationId),
}
