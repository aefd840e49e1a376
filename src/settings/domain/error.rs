//! Error types for settings domain validation.

use thiserror::Error;

/// Errors returned while constructing settings domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SettingsDomainError {
    /// The setting key is empty after trimming.
    #[error("setting key must not be empty")]
    EmptyKey,

    /// The setting key exceeds the 255-character storage limit.
    #[error("setting key exceeds 255 character limit: {0}")]
    KeyTooLong(String),

    /// The setting key contains whitespace or control characters.
    #[error("setting key '{0}' must not contain whitespace or control characters")]
    InvalidKey(String),

    /// The setting value is not well-formed JSON.
    #[error("setting value is not valid JSON: {0}")]
    InvalidJson(String),
}
