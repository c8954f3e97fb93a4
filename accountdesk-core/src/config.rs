//! Application settings
//!
//! Settings live in `~/.config/accountdesk/config.toml` by default. Every
//! field has a default, so a missing or partial file is fine.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::tracing::{TracingConfig, TracingLevel};

/// Directory name used under the platform config and data directories
pub const APP_DIR_NAME: &str = "accountdesk";

/// Settings file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Top-level settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Where the account list is stored
    #[serde(default)]
    pub storage: StorageSettings,
    /// Log output
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Storage location settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Data directory; the platform data directory when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level name (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Custom `EnvFilter` directive, overrides `level`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

fn default_log_level() -> String {
    TracingLevel::default().to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            filter: None,
        }
    }
}

impl LoggingSettings {
    /// Builds a tracing configuration from these settings
    ///
    /// An unknown level name falls back to the default level.
    #[must_use]
    pub fn tracing_config(&self) -> TracingConfig {
        let level = self.level.parse().unwrap_or_else(|()| {
            tracing::warn!(level = %self.level, "Unknown log level in settings");
            TracingLevel::default()
        });
        let config = TracingConfig::new().with_level(level);
        match self.filter {
            Some(ref filter) => config.with_filter(filter.clone()),
            None => config,
        }
    }
}

impl StorageSettings {
    /// Resolves the data directory, falling back to the platform default
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoConfigDir` if no directory is configured and
    /// the platform has no data directory.
    pub fn resolve_data_dir(&self) -> ConfigResult<PathBuf> {
        match self.data_dir {
            Some(ref dir) => Ok(dir.clone()),
            None => default_data_dir(),
        }
    }
}

/// Returns the platform data directory for `AccountDesk`
///
/// # Errors
///
/// Returns `ConfigError::NoConfigDir` if the platform has none.
pub fn default_data_dir() -> ConfigResult<PathBuf> {
    dirs::data_dir()
        .map(|d| d.join(APP_DIR_NAME))
        .ok_or(ConfigError::NoConfigDir)
}

impl Settings {
    /// Returns the default settings file path
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoConfigDir` if the platform has no config
    /// directory.
    pub fn default_path() -> ConfigResult<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Loads settings from `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file does not exist, or a read
    /// or parse error.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(format!("{}: {e}", path.display())))?;
        let settings: Self = toml::from_str(&contents)
            .map_err(|e| ConfigError::Parse(format!("{}: {e}", path.display())))?;

        tracing::debug!(path = %path.display(), "Loaded settings");
        Ok(settings)
    }

    /// Loads settings from `path`, using defaults if the file is missing
    ///
    /// # Errors
    ///
    /// Returns a read or parse error if the file exists but is unusable.
    pub fn load_or_default(path: &Path) -> ConfigResult<Self> {
        match Self::load_from(path) {
            Err(ConfigError::NotFound(_)) => {
                tracing::debug!(path = %path.display(), "No settings file, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Writes settings to `path`, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Write(format!("{}: {e}", parent.display())))?;
        }

        let contents =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        std::fs::write(path, contents)
            .map_err(|e| ConfigError::Write(format!("{}: {e}", path.display())))
    }
}
