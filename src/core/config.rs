//! Configuration file management.
//!
//! Handles reading and validating the optional `.keybox.toml` file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::core::constants;
use crate::core::validation;
use crate::error::{ConfigError, Result};

/// Tool configuration stored in `.keybox.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Key store settings
    #[serde(default)]
    pub keybox: Meta,
    /// Channel watch settings
    #[serde(default)]
    pub watch: WatchConfig,
}

/// Key store section of the configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Root of the key directories. A leading `~/` is expanded.
    #[serde(default = "default_keys_dir")]
    pub keys_dir: String,
    /// Modulus size for newly generated keys
    #[serde(default = "default_key_bits")]
    pub key_bits: usize,
}

/// Watch section of the configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Poll interval in milliseconds
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Give up after this many seconds; 0 waits forever
    #[serde(default)]
    pub timeout_secs: u64,
}

fn default_keys_dir() -> String {
    constants::KEYS_DIR.to_string()
}

fn default_key_bits() -> usize {
    constants::DEFAULT_KEY_BITS
}

fn default_interval_ms() -> u64 {
    constants::WATCH_INTERVAL_MS
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            keys_dir: default_keys_dir(),
            key_bits: default_key_bits(),
        }
    }
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            timeout_secs: 0,
        }
    }
}

impl Config {
    /// Path to the configuration file in the current directory
    pub fn config_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Load configuration from `.keybox.toml` in the current directory.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the TOML is malformed, or
    /// `ConfigError::InvalidValue` if validation fails.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            debug!("no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;
        config.validate()?;

        debug!(
            keys_dir = %config.keybox.keys_dir,
            key_bits = config.keybox.key_bits,
            "config loaded"
        );
        Ok(config)
    }

    /// Validate the configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` on the first bad field.
    pub fn validate(&self) -> Result<()> {
        if self.keybox.keys_dir.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "keybox.keys_dir".to_string(),
                reason: "cannot be empty".to_string(),
            }
            .into());
        }

        if let Err(e) = validation::validate_key_bits(self.keybox.key_bits) {
            return Err(ConfigError::InvalidValue {
                field: "keybox.key_bits".to_string(),
                reason: e.to_string(),
            }
            .into());
        }

        if self.watch.interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "watch.interval_ms".to_string(),
                reason: "must be greater than zero".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Resolved key directory root with `~/` expanded.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoHomeDir` if `~/` is used and no home
    /// directory is known.
    pub fn keys_dir(&self) -> Result<PathBuf> {
        expand_home(&self.keybox.keys_dir)
    }

    /// Poll interval for the watch loop
    pub fn watch_interval(&self) -> Duration {
        Duration::from_millis(self.watch.interval_ms)
    }

    /// Watch timeout, `None` when waiting forever
    pub fn watch_timeout(&self) -> Option<Duration> {
        match self.watch.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

/// Expand a leading `~` or `~/` to the user's home directory.
///
/// # Errors
///
/// Returns `ConfigError::NoHomeDir` if the home directory is unknown.
pub fn expand_home(path: &str) -> Result<PathBuf> {
    if path == "~" {
        return dirs::home_dir().ok_or_else(|| ConfigError::NoHomeDir.into());
    }
    match path.strip_prefix("~/") {
        Some(rest) => {
            let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
            Ok(home.join(rest))
        }
        None => Ok(PathBuf::from(path)),
    }
}
