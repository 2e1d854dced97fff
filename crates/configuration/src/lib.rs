// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

use crate::error::ConfigError;

// Re-export the core types to provide a clean public API.
pub use settings::{Correlation, Provider, Server, Settings};

/// Loads the application configuration from the `config.toml` file.
///
/// This function is the primary entry point for this crate. It reads the
/// configuration file, deserializes it into our strongly-typed `Settings`
/// struct, validates it, and returns it.
pub fn load_settings() -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        // Tells the builder to look for a file named `config.toml`
        .add_source(config::File::with_name("config.toml"))
        // Allow overrides such as STOCKLENS__SERVER__PORT=8080
        .add_source(config::Environment::with_prefix("STOCKLENS").separator("__"))
        .build()?;

    let settings = builder.try_deserialize::<Settings>()?;
    settings.validate()?;

    Ok(settings)
}
