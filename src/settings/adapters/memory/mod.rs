//! In-memory settings adapters.

mod settings;

pub use settings::InMemorySettingsRepository;
