//! Domain model for settings.

mod error;
mod key;
mod setting;
mod value;

pub use error::SettingsDomainError;
pub use key::SettingKey;
pub use setting::Setting;
pub use value::SettingValue;
