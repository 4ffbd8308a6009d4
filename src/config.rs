use config::{Config, ConfigError};
use serde::Deserialize;

/// Compiled-in parameters. The generator exposes no configuration surface.
pub mod defaults {
    pub const LOGGER_NAME: &str = "test-app";
    pub const VERSION: &str = "1.0.0";
    pub const MIN_DELAY_SECS: u64 = 3;
    pub const MAX_DELAY_SECS: u64 = 6;
}

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub driver: DriverSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApplicationSettings {
    pub logger_name: String,
    pub version: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DriverSettings {
    pub min_delay_secs: u64,
    pub max_delay_secs: u64,
}

impl Settings {
    /// Assembles settings from the compiled-in defaults only
    pub fn new() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("application.logger_name", defaults::LOGGER_NAME)?
            .set_default("application.version", defaults::VERSION)?
            .set_default("driver.min_delay_secs", defaults::MIN_DELAY_SECS)?
            .set_default("driver.max_delay_secs", defaults::MAX_DELAY_SECS)?
            .build()?;

        config.try_deserialize()
    }
}
