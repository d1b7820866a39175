use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use msghub_bridge::config::HubConfig;

/// Errors that can occur while loading or saving the hub configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to determine the user's configuration directory. This usually
    /// occurs when required environment variables are missing (e.g., `$HOME`
    /// on Unix or `%APPDATA%` on Windows).
    #[error("failed to obtain user's directories")]
    DirectoriesNotFound,
    /// An I/O error occurred while reading or writing the configuration file.
    #[error("failed to read config: {0}")]
    IoError(#[from] std::io::Error),
    /// The configuration file contains invalid TOML or does not match the expected structure.
    #[error("failed to deserialize config: {0}")]
    DeserializeError(#[from] toml::de::Error),
    /// Failed to serialize the configuration to TOML.
    #[error("failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// Returns the default location of `config.toml` for the current user.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    match ProjectDirs::from("dev", "msghub", "msghub") {
        Some(dirs) => Ok(dirs.config_dir().join("config.toml")),
        None => Err(ConfigError::DirectoriesNotFound),
    }
}

/// Loads the configuration from the user's configuration directory, writing
/// the defaults there first if the file does not exist yet.
pub fn load_config() -> Result<HubConfig, ConfigError> {
    load_config_from(&default_config_path()?)
}

/// Loads the configuration from `config_path`, creating it with default
/// values when it is missing.
pub fn load_config_from(config_path: &Path) -> Result<HubConfig, ConfigError> {
    log::info!("Loading configuration from {config_path:?}");
    if config_path.exists() {
        let contents = fs::read_to_string(config_path)?;
        return Ok(toml::from_str(&contents)?);
    }

    let config = HubConfig::default();
    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let contents = toml::to_string_pretty(&config)?;
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(config_path)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()?;

    Ok(config)
}

/// Serializes `config` to pretty-printed TOML at `config_path`, overwriting
/// any existing file.
pub fn save_config_to(config_path: &Path, config: &HubConfig) -> Result<(), ConfigError> {
    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let contents = toml::to_string_pretty(config)?;
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(config_path)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()?;

    Ok(())
}
