//! TOML-based application configuration.
//!
//! Stores:
//! - Wheel bounds (hours, minutes, seconds)
//! - Tick cadence
//! - Alert preferences
//!
//! Configuration is stored at `~/.config/backstraightener/config.toml`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::{ConfigError, Result};
use crate::timer::{ControllerConfig, Wheel, Wheels};

/// Wheel bounds. Each value is the exclusive upper bound of its wheel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelsConfig {
    #[serde(default = "default_max_hour")]
    pub max_hour: u32,
    #[serde(default = "default_max_sexagesimal")]
    pub max_minute: u32,
    #[serde(default = "default_max_sexagesimal")]
    pub max_second: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_vibrate_ms")]
    pub vibrate_ms: u64,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/backstraightener/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub wheels: WheelsConfig,
    #[serde(default)]
    pub timer: TimerConfig,
    #[serde(default)]
    pub alert: AlertConfig,
}

fn default_max_hour() -> u32 {
    100
}
fn default_max_sexagesimal() -> u32 {
    60
}
fn default_tick_interval_ms() -> u64 {
    1000
}
fn default_vibrate_ms() -> u64 {
    1000
}
fn default_true() -> bool {
    true
}

impl Default for WheelsConfig {
    fn default() -> Self {
        Self {
            max_hour: default_max_hour(),
            max_minute: default_max_sexagesimal(),
            max_second: default_max_sexagesimal(),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            vibrate_ms: default_vibrate_ms(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if parts.peek().map_or(true, |p| p.is_empty()) {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_some() {
                current = current.get_mut(part).ok_or_else(unknown)?;
                continue;
            }

            let obj = current.as_object_mut().ok_or_else(unknown)?;
            let existing = obj.get(part).ok_or_else(unknown)?;

            let new_value = match existing {
                serde_json::Value::Bool(_) => value
                    .parse::<bool>()
                    .map(serde_json::Value::Bool)
                    .map_err(|e| invalid(e.to_string()))?,
                serde_json::Value::Number(_) => value
                    .parse::<u64>()
                    .map(|n| serde_json::Value::Number(n.into()))
                    .map_err(|_| invalid(format!("cannot parse '{value}' as a whole number")))?,
                serde_json::Value::Object(_) => {
                    return Err(invalid("cannot overwrite a whole section".into()))
                }
                _ => serde_json::Value::String(value.into()),
            };

            obj.insert(part.to_string(), new_value);
            return Ok(());
        }

        Err(unknown())
    }

    /// Path of the config file inside the data directory.
    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or return default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path, writing defaults there if it is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                cfg.validate()?;
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, writing defaults");
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
            .into()),
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key without touching the disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the result fails validation. `self` is left unchanged on error.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config = serde_json::from_value(json)?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Reject settings the countdown can't run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("wheels.max_hour", u64::from(self.wheels.max_hour)),
            ("wheels.max_minute", u64::from(self.wheels.max_minute)),
            ("wheels.max_second", u64::from(self.wheels.max_second)),
            ("timer.tick_interval_ms", self.timer.tick_interval_ms),
        ];
        for (key, value) in positive {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    key: key.into(),
                    message: "must be greater than zero".into(),
                });
            }
        }

        let ceilings = [
            ("wheels.max_hour", self.wheels.max_hour, 100),
            ("wheels.max_minute", self.wheels.max_minute, 60),
            ("wheels.max_second", self.wheels.max_second, 60),
        ];
        for (key, value, ceiling) in ceilings {
            if value > ceiling {
                return Err(ConfigError::InvalidValue {
                    key: key.into(),
                    message: format!("must be at most {ceiling}"),
                });
            }
        }
        Ok(())
    }

    pub fn wheels(&self) -> Wheels {
        Wheels {
            hours: Wheel::new(0, self.wheels.max_hour),
            minutes: Wheel::new(0, self.wheels.max_minute),
            seconds: Wheel::new(0, self.wheels.max_second),
        }
    }

    pub fn controller_config(&self) -> ControllerConfig {
        ControllerConfig {
            wheels: self.wheels(),
            tick_interval: Duration::from_millis(self.timer.tick_interval_ms),
            alert_duration_ms: self.alert.vibrate_ms,
        }
    }
}
