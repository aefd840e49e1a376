//! Setting entity.

use super::{SettingKey, SettingValue};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// One stored setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    key: SettingKey,
    value: SettingValue,
    updated_at: DateTime<Utc>,
}

impl Setting {
    /// Creates a setting stamped with the current clock time.
    #[must_use]
    pub fn new(key: SettingKey, value: SettingValue, clock: &impl Clock) -> Self {
        Self {
            key,
            value,
            updated_at: clock.utc(),
        }
    }

    /// Returns the key.
    #[must_use]
    pub const fn key(&self) -> &SettingKey {
        &self.key
    }

    /// Returns the JSON value.
    #[must_use]
    pub const fn value(&self) -> &SettingValue {
        &self.value
    }

    /// Returns the last write timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
