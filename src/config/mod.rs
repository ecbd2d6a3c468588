use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::warn;

use crate::core::app::{DEFAULT_STORAGE_KEY, DEFAULT_UNDO_WINDOW_SECS, VaultOptions};

pub mod migrate;

/// Keys every config file is expected to carry.
pub const CONFIG_KEYS: [&str; 5] = [
    "database",
    "storage_key",
    "undo_window_secs",
    "week_start",
    "log_level",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default = "default_undo_window")]
    pub undo_window_secs: u64,
    #[serde(default = "default_week_start")]
    pub week_start: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}
fn default_undo_window() -> u64 {
    DEFAULT_UNDO_WINDOW_SECS
}
fn default_week_start() -> String {
    "sunday".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            storage_key: default_storage_key(),
            undo_window_secs: default_undo_window(),
            week_start: default_week_start(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("timevault")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".timevault")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timevault.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("timevault.sqlite")
    }

    /// Load configuration from file, or return defaults if missing or unreadable
    pub fn load() -> Self {
        let path = Self::config_file();

        if !path.exists() {
            return Self::default();
        }

        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot read config; using defaults");
                return Self::default();
            }
        };

        match serde_yaml::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot parse config; using defaults");
                Self::default()
            }
        }
    }

    pub fn vault_options(&self) -> VaultOptions {
        VaultOptions {
            storage_key: self.storage_key.clone(),
            undo_window_ms: (self.undo_window_secs.min(i64::MAX as u64 / 1000) as i64) * 1000,
        }
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> io::Result<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => crate::utils::path::resolve_in(&dir, &name),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(db_path)
    }
}
