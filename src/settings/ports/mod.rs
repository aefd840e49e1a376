//! Port contracts for settings persistence.

pub mod repository;

pub use repository::{SettingsRepository, SettingsRepositoryError, SettingsRepositoryResult};
