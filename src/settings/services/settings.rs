//! Service layer for reading and writing settings.

use crate::settings::{
    domain::{Setting, SettingKey, SettingValue, SettingsDomainError},
    ports::{SettingsRepository, SettingsRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for settings operations.
#[derive(Debug, Error)]
pub enum SettingsServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] SettingsDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] SettingsRepositoryError),
}

/// Result type for settings service operations.
pub type SettingsServiceResult<T> = Result<T, SettingsServiceError>;

/// Settings read/write service.
#[derive(Clone)]
pub struct SettingsService<R, C>
where
    R: SettingsRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> SettingsService<R, C>
where
    R: SettingsRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new settings service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Finds a setting by key.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsServiceError::Domain`] when the key is invalid, or
    /// [`SettingsServiceError::Repository`] when persistence lookup fails.
    pub async fn get(&self, key: &str) -> SettingsServiceResult<Option<Setting>> {
        let setting_key = SettingKey::new(key)?;
        Ok(self.repository.find(&setting_key).await?)
    }

    /// Returns all settings ordered by key.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn list(&self) -> SettingsServiceResult<Vec<Setting>> {
        Ok(self.repository.list().await?)
    }

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsServiceError::Domain`] when the key is invalid, or
    /// [`SettingsServiceError::Repository`] when persistence fails.
    pub async fn upsert(
        &self,
        key: &str,
        value: SettingValue,
    ) -> SettingsServiceResult<Setting> {
        let setting = Setting::new(SettingKey::new(key)?, value, &*self.clock);
        Ok(self.repository.upsert(&setting).await?)
    }

    /// Parses `raw` as JSON and stores it under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsServiceError::Domain`] when the key is invalid or
    /// `raw` is not well-formed JSON, or [`SettingsServiceError::Repository`]
    /// when persistence fails.
    pub async fn upsert_raw(&self, key: &str, raw: &str) -> SettingsServiceResult<Setting> {
        let value = SettingValue::parse(raw)?;
        self.upsert(key, value).await
    }
}
