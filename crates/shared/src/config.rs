//! Application configuration management.

use std::path::Path;

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Record store configuration.
    pub store: StoreConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Record store configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Path of the JSON file holding recorded transactions.
    #[serde(default = "default_transactions_path")]
    pub transactions_path: String,
}

fn default_transactions_path() -> String {
    "data/transactions.json".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            transactions_path: default_transactions_path(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG` when set.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones overriding earlier ones: `config/default`,
    /// `config/{RUN_MODE}`, then `SAVVY__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// Same as [`Self::load`], reading the profile files from `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load_from(dir: &Path) -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());
        let profile = |name: &str| {
            config::File::from(dir.join(name))
                .format(config::FileFormat::Toml)
                .required(false)
        };

        let config = config::Config::builder()
            .add_source(profile("default.toml"))
            .add_source(profile(&format!("{run_mode}.toml")))
            .add_source(config::Environment::with_prefix("SAVVY").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
