mod config;

pub use config::{AlertConfig, Config, TimerConfig, WheelsConfig};

use std::path::PathBuf;

use crate::error::Result;

/// Returns the directory holding `config.toml`.
///
/// `BACKSTRAIGHTENER_HOME` wins when set. Otherwise this is
/// `~/.config/backstraightener[-dev]/`, with the `-dev` suffix selected by
/// `BACKSTRAIGHTENER_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("BACKSTRAIGHTENER_HOME") {
        Some(home) => PathBuf::from(home),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("BACKSTRAIGHTENER_ENV").unwrap_or_default();
            if env == "dev" {
                base_dir.join("backstraightener-dev")
            } else {
                base_dir.join("backstraightener")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
