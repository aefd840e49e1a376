//! JSON setting value.

use super::SettingsDomainError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Any well-formed JSON document stored under a setting key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingValue(Value);

impl SettingValue {
    /// Wraps an already parsed JSON value.
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// Parses a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsDomainError::InvalidJson`] when `raw` is not
    /// well-formed JSON.
    pub fn parse(raw: &str) -> Result<Self, SettingsDomainError> {
        serde_json::from_str(raw)
            .map(Self)
            .map_err(|err| SettingsDomainError::InvalidJson(err.to_string()))
    }

    /// Returns the wrapped JSON value.
    #[must_use]
    pub const fn as_json(&self) -> &Value {
        &self.0
    }

    /// Consumes the wrapper and returns the JSON value.
    #[must_use]
    pub fn into_json(self) -> Value {
        self.0
    }
}

impl From<Value> for SettingValue {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
