use crate::{ApiConfig, ConfigError, ConfigErrorResult, DatabaseConfig, LoggingConfig};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for FT_CONFIG_DIR env var, else use ./.ft/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply FT_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: FT_CONFIG_DIR env var > ./.ft/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("FT_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".ft"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;

        // Validate database path doesn't escape config dir
        if !self.database.in_memory {
            let db_path = std::path::Path::new(&self.database.path);
            if db_path.is_absolute() || self.database.path.contains("..") {
                return Err(ConfigError::database(
                    "database.path must be relative and cannot contain '..'",
                ));
            }
        }

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Log configuration summary (NEVER logs the API key).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  api: {} (key: {}, timeout: {}s)",
            self.api.base_url,
            if self.api.api_key.is_some() {
                "set"
            } else {
                "unset"
            },
            self.api.timeout_secs
        );

        if self.database.in_memory {
            info!("  database: in-memory");
        } else {
            info!("  database: {}", self.database.path);
        }

        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Api
        Self::apply_env_string("FT_API_BASE_URL", &mut self.api.base_url);
        Self::apply_env_option_string("FT_API_KEY", &mut self.api.api_key);
        Self::apply_env_parse("FT_API_TIMEOUT_SECS", &mut self.api.timeout_secs);

        // Database
        Self::apply_env_string("FT_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_bool("FT_DATABASE_IN_MEMORY", &mut self.database.in_memory);

        // Logging
        Self::apply_env_parse("FT_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("FT_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("FT_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
