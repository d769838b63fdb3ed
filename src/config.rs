use crate::domain::DEFAULT_PREFIX;
use crate::error::{Result, TagBumpError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name looked up in the working directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "tagbump.toml";

/// Represents the complete configuration for tag-bump.
///
/// Every section is optional; a missing file behaves like an empty one.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub tag: TagConfig,

    #[serde(default)]
    pub remote: RemoteConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

fn default_remote_name() -> String {
    "origin".to_string()
}

fn default_push() -> bool {
    true
}

/// How version tags are named.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TagConfig {
    /// Prefix used both to select version tags and to format new ones
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl Default for TagConfig {
    fn default() -> Self {
        TagConfig {
            prefix: default_prefix(),
        }
    }
}

/// Where new tags are published.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RemoteConfig {
    #[serde(default = "default_remote_name")]
    pub name: String,

    #[serde(default = "default_push")]
    pub push: bool,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        RemoteConfig {
            name: default_remote_name(),
            push: default_push(),
        }
    }
}

/// Controls runtime behavior without affecting version computation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    #[serde(default)]
    pub skip_confirmation: bool,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `tagbump.toml` in current directory
/// 3. `tagbump.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists (or was named explicitly) but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config_file(),
    };

    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading configuration");
            load_config_file(&path)
        }
        None => {
            debug!("no configuration file found, using defaults");
            Ok(Config::default())
        }
    }
}

fn discover_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}

fn load_config_file(path: &Path) -> Result<Config> {
    let config_str = fs::read_to_string(path).map_err(|e| {
        TagBumpError::config(format!("Cannot read {}: {}", path.display(), e))
    })?;

    toml::from_str(&config_str)
        .map_err(|e| TagBumpError::config(format!("Cannot parse {}: {}", path.display(), e)))
}
