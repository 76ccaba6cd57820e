use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::kernel::constants;
use crate::kernel::error::{Error, Result};

/// Engine settings from the `dstone:` section of `config.yml`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CoreSettings {
    /// Run in debug mode
    #[serde(default)]
    pub debug: bool,

    /// Enable hot reloading in the UI host
    #[serde(default)]
    pub reload: bool,

    /// Directory whose immediate subdirectories are plugin packages
    #[serde(default = "default_plugins_dir")]
    pub plugins_dir: PathBuf,

    /// Directory holding static assets for the UI host
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,
}

fn default_plugins_dir() -> PathBuf {
    PathBuf::from(constants::DEFAULT_PLUGINS_DIR)
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from(constants::DEFAULT_ASSETS_DIR)
}

impl Default for CoreSettings {
    fn default() -> Self {
        Self {
            debug: false,
            reload: false,
            plugins_dir: default_plugins_dir(),
            assets_dir: default_assets_dir(),
        }
    }
}

/// Application configuration loaded from `config.yml`.
///
/// The `plugins` table carries one free-form configuration section per
/// plugin name; each section is handed to that plugin's `validate_config`
/// and `initialize` during resolution. Plugins without a section receive
/// `null`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DStoneConfig {
    #[serde(default)]
    pub dstone: CoreSettings,

    #[serde(default)]
    pub plugins: HashMap<String, Value>,
}

impl DStoneConfig {
    /// Load configuration from a YAML file.
    #[cfg(feature = "yaml-config")]
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::io(e, "read config", path.to_path_buf()))?;
        serde_yaml::from_str(&content).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: format!("invalid YAML: {}", e),
            source: Some(Box::new(e)),
        })
    }

    /// Load configuration from `path` if it exists, defaults otherwise.
    #[cfg(feature = "yaml-config")]
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            log::info!(
                "No configuration file at {}; using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }
}
