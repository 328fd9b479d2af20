//! ChatLoop configuration
//!
//! # Configuration hierarchy
//!
//! ```text
//! Priority (high → low):
//! 1. CLI arguments
//! 2. Environment variables
//! 3. Config file (~/.config/chatloop/config.toml)
//! 4. Default values
//! ```
//!
//! # Usage
//!
//! ```rust
//! use chatloop::util::config::UserConfig;
//!
//! let config: UserConfig = toml::from_str("[i18n]\nlang = \"ja\"").unwrap();
//! assert_eq!(config.i18n.lang, "ja");
//! assert_eq!(config.i18n.fallback, "en");
//! ```

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tlog;
use crate::util::i18n::MSG;
use crate::util::logger::LogLevel;

/// Directory name under the platform config root
const APP_DIR: &str = "chatloop";

/// Config file name
const CONFIG_FILE: &str = "config.toml";

/// User-level configuration for ChatLoop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UserConfig {
    /// Internationalization settings
    #[serde(default)]
    pub i18n: I18nConfig,
    /// Logging settings
    #[serde(default)]
    pub log: LogConfig,
}

/// I18n configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct I18nConfig {
    /// Preferred language
    #[serde(default = "default_lang")]
    pub lang: String,
    /// Language tried when `lang` has no catalogue
    #[serde(default = "default_lang")]
    pub fallback: String,
}

fn default_lang() -> String {
    "en".to_string()
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            lang: default_lang(),
            fallback: default_lang(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// One of `debug`, `info`, `warn`, `error`
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LogConfig {
    /// Parse the configured level
    pub fn level(&self) -> Result<LogLevel, ConfigError> {
        self.level
            .parse()
            .map_err(|_| ConfigError::UnknownLogLevel(self.level.clone()))
    }
}

/// Get the user config directory
pub fn get_config_dir() -> Option<PathBuf> {
    config_dir_from(
        std::env::var_os("XDG_CONFIG_HOME"),
        std::env::var_os("HOME"),
        std::env::var_os("APPDATA"),
    )
}

/// Pick the config directory from `XDG_CONFIG_HOME`, `HOME` and `APPDATA`
fn config_dir_from(
    xdg_config: Option<OsString>,
    home: Option<OsString>,
    appdata: Option<OsString>,
) -> Option<PathBuf> {
    // Try XDG config directory on Unix
    if let Some(xdg_config) = xdg_config {
        return Some(PathBuf::from(xdg_config).join(APP_DIR));
    }

    // Fallback to ~/.config/chatloop
    if let Some(home) = home {
        return Some(PathBuf::from(home).join(".config").join(APP_DIR));
    }

    // On Windows, try %APPDATA%
    appdata.map(|appdata| PathBuf::from(appdata).join(APP_DIR))
}

/// Get the user config file path (~/.config/chatloop/config.toml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Load configuration.
///
/// With an explicit path the file must exist. Without one, the default
/// location is tried and a missing file yields the defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<UserConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_config_file(path);
    }

    let Some(path) = get_config_path() else {
        tlog!(debug, MSG::ConfigNoDir);
        return Ok(UserConfig::default());
    };

    if !path.exists() {
        tlog!(debug, MSG::ConfigMissing, path.display());
        return Ok(UserConfig::default());
    }

    load_config_file(&path)
}

/// Load and parse a config file
pub fn load_config_file(path: &Path) -> Result<UserConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tlog!(debug, MSG::ConfigLoaded, path.display());
    Ok(config)
}

/// Write the default configuration to `path`, refusing to overwrite
pub fn init_config(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()));
    }
    save_config(path, &UserConfig::default())
}

/// Save configuration to `path`, creating parent directories
pub fn save_config(
    path: &Path,
    config: &UserConfig,
) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }
    }

    let content = toml::to_string_pretty(config)?;
    fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tlog!(debug, MSG::ConfigCreated, path.display());

    Ok(())
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing a config file failed
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`UserConfig`]
    #[error("Config parse error in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Serializing the config failed
    #[error("Config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// `config init` target already exists
    #[error("Config file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// No platform config directory could be determined
    #[error("Cannot determine config directory")]
    NoConfigDir,

    /// `log.level` is not a known level
    #[error("Unknown log level: {0}")]
    UnknownLogLevel(String),
}
