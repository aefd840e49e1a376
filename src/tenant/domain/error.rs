//! Error types for tenant domain validation.

use thiserror::Error;

/// Errors returned while constructing tenant domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TenantDomainError {
    /// The tenant name is empty after trimming.
    #[error("tenant name must not be empty")]
    EmptyName,

    /// The tenant name exceeds the 200-character storage limit.
    #[error("tenant name exceeds 200 character limit: {0}")]
    NameTooLong(String),

    /// The tenant slug is empty after trimming.
    #[error("tenant slug must not be empty")]
    EmptySlug,

    /// The tenant slug exceeds the 63-character limit.
    #[error("tenant slug exceeds 63 character limit: {0}")]
    SlugTooLong(String),

    /// The tenant slug does not match `^[a-z0-9]+(-[a-z0-9]+)*$`.
    #[error(
        "tenant slug '{0}' is invalid (lowercase alphanumeric segments separated by single hyphens)"
    )]
    InvalidSlug(String),
}
