//! In-memory repository for settings tests and local runs.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::settings::{
    domain::{Setting, SettingKey},
    ports::{SettingsRepository, SettingsRepositoryError, SettingsRepositoryResult},
};

/// Thread-safe in-memory settings repository.
#[derive(Debug, Clone, Default)]
pub struct InMemorySettingsRepository {
    settings: Arc<RwLock<BTreeMap<SettingKey, Setting>>>,
}

impl InMemorySettingsRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> SettingsRepositoryError {
    SettingsRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl SettingsRepository for InMemorySettingsRepository {
    async fn find(&self, key: &SettingKey) -> SettingsRepositoryResult<Option<Setting>> {
        let settings = self.settings.read().map_err(lock_error)?;
        Ok(settings.get(key).cloned())
    }

    async fn list(&self) -> SettingsRepositoryResult<Vec<Setting>> {
        let settings = self.settings.read().map_err(lock_error)?;
        Ok(settings.values().cloned().collect())
    }

    async fn upsert(&self, setting: &Setting) -> SettingsRepositoryResult<Setting> {
        let mut settings = self.settings.write().map_err(lock_error)?;
        settings.insert(setting.key().clone(), setting.clone());
        Ok(setting.clone())
    }
}
