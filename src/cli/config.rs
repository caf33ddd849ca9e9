//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::DEFAULT_MAX_SPAN_DAYS;
use crate::store::{DEFAULT_BUSY_TIMEOUT, DEFAULT_UTC_OFFSET_HOURS, StoreSettings};

/// Environment variable naming an alternate config file.
pub const CONFIG_ENV: &str = "CLERK_CONFIG";

/// Application configuration loaded from config file.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Database file
    pub database: Option<PathBuf>,

    /// Widest printout search span, in days
    pub search_range_days: u32,

    /// Offset used for "today" and printout timestamps
    pub utc_offset_hours: i32,

    /// How long to wait on a locked database, in milliseconds
    pub busy_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: None,
            search_range_days: DEFAULT_MAX_SPAN_DAYS,
            utc_offset_hours: DEFAULT_UTC_OFFSET_HOURS,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT.as_millis() as u64,
        }
    }
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// `$CLERK_CONFIG` if set, otherwise `~/.config/clerk/config.toml`.
    pub fn config_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("clerk")
            .join("config.toml")
    }

    /// Resolve the database file, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--db` argument
    /// 2. Config file `database` setting
    /// 3. `clerk.db` in the user data directory
    pub fn database_path(&self, cli_db: Option<&PathBuf>) -> PathBuf {
        cli_db
            .cloned()
            .or_else(|| self.database.clone())
            .unwrap_or_else(|| {
                dirs::data_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("clerk")
                    .join("clerk.db")
            })
    }

    /// Store tunables derived from this config.
    ///
    /// Fails when `utc_offset_hours` is outside -23..=23.
    pub fn store_settings(&self) -> Result<StoreSettings> {
        let utc_offset = StoreSettings::offset_from_hours(self.utc_offset_hours)
            .with_context(|| {
                format!(
                    "utc_offset_hours must be between -23 and 23, got {}",
                    self.utc_offset_hours
                )
            })?;
        Ok(StoreSettings {
            utc_offset,
            max_search_days: self.search_range_days,
            busy_timeout: Duration::from_millis(self.busy_timeout_ms),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_no_database() {
        let config = Config::default();
        assert!(config.database.is_none());
        assert_eq!(config.search_range_days, 7);
        assert_eq!(config.utc_offset_hours, 9);
        assert_eq!(config.busy_timeout_ms, 5000);
    }

    #[test]
    fn database_path_prefers_cli_arg() {
        let config = Config {
            database: Some(PathBuf::from("/config/clerk.db")),
            ..Config::default()
        };
        let cli_db = PathBuf::from("/cli/clerk.db");
        assert_eq!(
            config.database_path(Some(&cli_db)),
            PathBuf::from("/cli/clerk.db")
        );
    }

    #[test]
    fn database_path_falls_back_to_config() {
        let config = Config {
            database: Some(PathBuf::from("/config/clerk.db")),
            ..Config::default()
        };
        assert_eq!(config.database_path(None), PathBuf::from("/config/clerk.db"));
    }

    #[test]
    fn database_path_falls_back_to_data_dir() {
        let path = Config::default().database_path(None);
        assert!(path.ends_with("clerk/clerk.db"));
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "search_range_days = 14\nutc_offset_hours = 0\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.search_range_days, 14);
        assert_eq!(config.utc_offset_hours, 0);
        assert_eq!(config.busy_timeout_ms, 5000);

        let settings = config.store_settings().unwrap();
        assert_eq!(settings.max_search_days, 14);
        assert_eq!(settings.utc_offset.local_minus_utc(), 0);
    }

    #[test]
    fn unknown_key_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "dir = \"/notes\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse config file"));
    }

    #[test]
    fn store_settings_uses_configured_timeout() {
        let config = Config {
            busy_timeout_ms: 250,
            ..Config::default()
        };
        assert_eq!(
            config.store_settings().unwrap().busy_timeout,
            Duration::from_millis(250)
        );
    }

    #[test]
    fn out_of_range_offset_is_an_error() {
        for hours in [24, -24, 48] {
            let config = Config {
                utc_offset_hours: hours,
                ..Config::default()
            };
            let err = config.store_settings().unwrap_err();
            assert!(format!("{err:#}").contains("utc_offset_hours"));
        }

        let config = Config {
            utc_offset_hours: -23,
            ..Config::default()
        };
        let settings = config.store_settings().unwrap();
        assert_eq!(settings.utc_offset.local_minus_utc(), -23 * 3600);
    }
}
