//! Application services for settings.

mod settings;

pub use settings::{SettingsService, SettingsServiceError, SettingsServiceResult};
