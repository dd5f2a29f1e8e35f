// src/core/config/loader.rs
use crate::core::config::Config;
use anyhow::{Context as _, Result};
use log::debug;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = ".charstats.toml";

/// Loads `.charstats.toml` starting from the given directory and walking up
/// through parent directories until a file is found.
///
/// # Arguments
///
/// * `dir` - The starting directory to search for `.charstats.toml`
///
/// # Returns
///
/// * `Ok(Config)` - The parsed config, or `Config::default()` if no file exists
///
/// # Errors
///
/// This function may return an error if:
/// * The config file exists but cannot be read
/// * The file is not valid TOML or has unknown keys
#[inline]
pub fn load_config(dir: &Path) -> Result<Config> {
    let mut current_dir = dir.to_path_buf();

    let mut visited = HashSet::new();

    while !visited.contains(&current_dir) {
        visited.insert(current_dir.clone());

        let config_file = current_dir.join(CONFIG_FILE_NAME);

        if config_file.exists() {
            debug!("Loading config from {}", config_file.display());
            let content = fs::read_to_string(&config_file).with_context(|| {
                format!("Failed to read config file: {}", config_file.display())
            })?;

            let config: Config = toml::from_str(&content).with_context(|| {
                format!("Failed to parse config file: {}", config_file.display())
            })?;

            return Ok(config.relative_to(&current_dir));
        }

        if let Some(parent) = current_dir.parent() {
            current_dir = parent.to_path_buf();
        } else {
            break;
        }
    }

    debug!("No {CONFIG_FILE_NAME} found, using defaults");
    Ok(Config::default())
}
