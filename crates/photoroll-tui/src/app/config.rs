//! TUI configuration persistence
//!
//! Saves and loads user preferences such as the acting user name and the
//! event store location.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration file name
const CONFIG_FILE_NAME: &str = "config.json";

/// Configuration directory under ~/.config
const CONFIG_DIR_NAME: &str = "photoroll";

/// TUI configuration that persists across sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Name the current user acts under (organizer checks use it)
    #[serde(default)]
    pub user: Option<String>,

    /// Event store location; defaults to the data directory
    #[serde(default)]
    pub store_path: Option<PathBuf>,

    /// Ring the terminal bell on a wrong PIN
    #[serde(default = "default_true")]
    pub haptics: bool,

    /// Use the high-contrast palette
    #[serde(default)]
    pub high_contrast: bool,

    /// Event loop tick in milliseconds; bounds timer precision
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_true() -> bool {
    true
}

fn default_tick_rate_ms() -> u64 {
    50
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            user: None,
            store_path: None,
            haptics: true,
            high_contrast: false,
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl TuiConfig {
    /// Get the configuration directory path
    pub fn config_dir() -> Option<PathBuf> {
        // Try XDG_CONFIG_HOME first, then fall back to ~/.config
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(xdg_config).join(CONFIG_DIR_NAME));
        }

        dirs::config_dir().map(|p| p.join(CONFIG_DIR_NAME))
    }

    /// Get the full config file path
    pub fn config_file_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default location
    pub fn load() -> Self {
        match Self::config_file_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load configuration from `path`
    ///
    /// Returns default configuration if the file doesn't exist or can't be parsed.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("Failed to parse config file: {}", e);
                Self::default()
            }),
            Err(e) => {
                tracing::warn!("Failed to read config file: {}", e);
                Self::default()
            }
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_file_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| ConfigError::Io(e.to_string()))?;
        }

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;

        fs::write(path, contents).map_err(|e| ConfigError::Io(e.to_string()))?;

        tracing::debug!("Saved config to {:?}", path);
        Ok(())
    }

    /// Effective user name: configured, else `$USER`, else "guest"
    pub fn user_name(&self) -> String {
        self.user
            .clone()
            .or_else(|| std::env::var("USER").ok())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| "guest".to_string())
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.clamp(10, 250))
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialize(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.user.is_none());
        assert!(config.store_path.is_none());
        assert!(config.haptics);
        assert!(!config.high_contrast);
        assert_eq!(config.tick_rate(), Duration::from_millis(50));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = TuiConfig {
            user: Some("sam".to_string()),
            store_path: Some(PathBuf::from("/tmp/events.json")),
            haptics: false,
            high_contrast: true,
            tick_rate_ms: 20,
        };
        config.save_to(&path).unwrap();

        let loaded = TuiConfig::load_from(&path);
        assert_eq!(loaded.user.as_deref(), Some("sam"));
        assert_eq!(loaded.store_path, Some(PathBuf::from("/tmp/events.json")));
        assert!(!loaded.haptics);
        assert!(loaded.high_contrast);
        assert_eq!(loaded.tick_rate_ms, 20);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: TuiConfig = serde_json::from_str(r#"{"user":"alex"}"#).unwrap();
        assert_eq!(config.user_name(), "alex");
        assert!(config.haptics);
        assert_eq!(config.tick_rate_ms, 50);
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        let config = TuiConfig::load_from(&path);
        assert!(config.haptics);
        assert!(config.user.is_none());
    }

    #[test]
    fn test_tick_rate_is_clamped() {
        let config = TuiConfig {
            tick_rate_ms: 5_000,
            ..TuiConfig::default()
        };
        assert_eq!(config.tick_rate(), Duration::from_millis(250));
    }
}
