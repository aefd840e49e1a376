//! Validated setting key.

use super::SettingsDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum key length in characters.
const MAX_KEY_LENGTH: usize = 255;

/// Non-empty key identifying one setting (e.g. `import.auto_detect`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SettingKey(String);

impl SettingKey {
    /// Creates a validated setting key.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsDomainError::EmptyKey`] when the value is empty
    /// after trimming, [`SettingsDomainError::KeyTooLong`] when it exceeds
    /// 255 characters, or [`SettingsDomainError::InvalidKey`] when it
    /// contains whitespace or control characters.
    pub fn new(value: impl Into<String>) -> Result<Self, SettingsDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(SettingsDomainError::EmptyKey);
        }

        if trimmed.chars().count() > MAX_KEY_LENGTH {
            return Err(SettingsDomainError::KeyTooLong(raw));
        }

        if trimmed
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
        {
            return Err(SettingsDomainError::InvalidKey(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SettingKey {
    type Error = SettingsDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SettingKey> for String {
    fn from(key: SettingKey) -> Self {
        key.0
    }
}

impl AsRef<str> for SettingKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
