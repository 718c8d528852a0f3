//! Configuration module
//!
//! Loads the optional `config.toml` that sits next to the state file.
//! A missing file means defaults; a broken one is an error.

mod types;

pub use types::{Config, Limits, OverflowPolicy};

use crate::error::{GetDateError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// File name looked up inside the state directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Load configuration from `dir/config.toml`, falling back to defaults
pub fn load_or_default(dir: &Path) -> Result<Config> {
    let path = dir.join(CONFIG_FILE_NAME);

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Err(e) => {
            return Err(GetDateError::Config(format!(
                "Cannot read config from '{}': {}",
                path.display(),
                e
            )))
        }
    };

    let config: Config = toml::from_str(&content)?;
    if config.limits.max_entries == 0 {
        return Err(GetDateError::Config(
            "limits.max_entries must be at least 1".to_string(),
        ));
    }

    log::debug!("loaded config from {}: {:?}", path.display(), config);
    Ok(config)
}
