/// Database URL resolution
pub mod database;

/// Default site-settings loading from settings.toml
pub mod settings;
