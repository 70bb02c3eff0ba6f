//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `MINDSPACE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use mindspace::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}:{}", config.server.host, config.server.port);
//! ```

mod ai;
mod error;
mod safety;
mod server;
mod storage;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use safety::SafetyConfig;
pub use server::{Environment, ServerConfig};
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// development setup with in-memory storage and the offline provider.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Language-model provider configuration
    #[serde(default)]
    pub ai: AiConfig,

    /// Record storage backend
    #[serde(default)]
    pub storage: StorageConfig,

    /// Custom trigger tables for the safety screens
    #[serde(default)]
    pub safety: SafetyConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `MINDSPACE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `MINDSPACE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `MINDSPACE__AI__OPENAI_API_KEY=...` -> `ai.openai_api_key = ...`
    /// - `MINDSPACE__STORAGE__BACKEND=file` -> `storage.backend = file`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MINDSPACE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate(self.is_production())?;
        self.storage.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Env vars are process-global; tests touching them run one at a time.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "MINDSPACE__SERVER__PORT",
        "MINDSPACE__SERVER__ENVIRONMENT",
        "MINDSPACE__AI__OPENAI_API_KEY",
        "MINDSPACE__AI__MODEL",
        "MINDSPACE__STORAGE__BACKEND",
        "MINDSPACE__STORAGE__DATA_DIR",
        "MINDSPACE__SAFETY__CRISIS_TABLE_PATH",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    fn load_with(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        clear_env();
        for (key, value) in vars {
            env::set_var(key, value);
        }
        let result = AppConfig::load();
        clear_env();
        result
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[]).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.ai.model, "gpt-5");
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert!(config.safety.crisis_table_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_nested_values() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[
            ("MINDSPACE__SERVER__PORT", "3000"),
            ("MINDSPACE__AI__MODEL", "gpt-5-mini"),
            ("MINDSPACE__STORAGE__BACKEND", "file"),
            ("MINDSPACE__STORAGE__DATA_DIR", "/tmp/mindspace"),
            ("MINDSPACE__SAFETY__CRISIS_TABLE_PATH", "/etc/mindspace/crisis.yaml"),
        ])
        .unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.ai.model, "gpt-5-mini");
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.storage.data_dir, Some(PathBuf::from("/tmp/mindspace")));
        assert_eq!(
            config.safety.crisis_table_path,
            Some(PathBuf::from("/etc/mindspace/crisis.yaml"))
        );
    }

    #[test]
    fn test_production_requires_api_key() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[("MINDSPACE__SERVER__ENVIRONMENT", "production")]).unwrap();

        assert!(config.is_production());
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired(_))
        ));
    }

    #[test]
    fn test_production_with_api_key_is_valid() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[
            ("MINDSPACE__SERVER__ENVIRONMENT", "production"),
            ("MINDSPACE__AI__OPENAI_API_KEY", "sk-test"),
        ])
        .unwrap();

        assert!(config.ai.has_openai());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_file_backend_without_dir_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[("MINDSPACE__STORAGE__BACKEND", "file")]).unwrap();
        assert!(config.validate().is_err());
    }
}
