//! Repository port for settings persistence.

use crate::settings::domain::{Setting, SettingKey};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for settings repository operations.
pub type SettingsRepositoryResult<T> = Result<T, SettingsRepositoryError>;

/// Settings persistence contract.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Finds a setting by key.
    async fn find(&self, key: &SettingKey) -> SettingsRepositoryResult<Option<Setting>>;

    /// Returns all settings ordered by key.
    async fn list(&self) -> SettingsRepositoryResult<Vec<Setting>>;

    /// Inserts the setting or replaces the value stored under its key.
    ///
    /// Returns the stored setting.
    async fn upsert(&self, setting: &Setting) -> SettingsRepositoryResult<Setting>;
}

/// Errors returned by settings repository implementations.
#[derive(Debug, Clone, Error)]
pub enum SettingsRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl SettingsRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
