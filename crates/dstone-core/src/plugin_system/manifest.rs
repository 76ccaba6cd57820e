use std::path::Path;

use serde::Deserialize;

use crate::plugin_system::descriptor::{
    PluginDescriptor, DEFAULT_PLUGIN_DESCRIPTION, DEFAULT_PLUGIN_VERSION,
};
use crate::plugin_system::error::PluginSystemError;

/// Manifest file expected in each plugin directory.
pub const PLUGIN_MANIFEST_FILE: &str = "plugin.json";

/// Metadata declared by a plugin package in its `plugin.json` manifest.
///
/// The plugin's canonical name is the directory name, never a manifest
/// field. Every field is optional; omitted values fall back to the
/// descriptor defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct PluginManifest {
    /// Name of the factory to construct the plugin with. Defaults to the
    /// directory name.
    #[serde(default)]
    pub entry_point: Option<String>,

    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub aliases: Vec<String>,

    #[serde(default)]
    pub priority: i32,

    #[serde(default)]
    pub dependencies: Vec<String>,

    #[serde(default)]
    pub sessionable: bool,
}

impl PluginManifest {
    /// Parse a manifest from its JSON text.
    pub fn parse(content: &str, path: &Path) -> Result<Self, PluginSystemError> {
        serde_json::from_str(content).map_err(|e| PluginSystemError::ManifestError {
            path: path.to_path_buf(),
            message: format!("invalid manifest JSON: {}", e),
            source: Some(Box::new(e)),
        })
    }

    /// The factory name to look up in the registration table.
    pub fn entry_point<'a>(&'a self, dir_name: &'a str) -> &'a str {
        self.entry_point.as_deref().unwrap_or(dir_name)
    }

    /// Build the descriptor for the plugin named `name` (the directory
    /// name), applying the descriptor defaults for omitted fields.
    pub fn into_descriptor(self, name: &str) -> PluginDescriptor {
        PluginDescriptor {
            name: name.to_string(),
            version: self
                .version
                .unwrap_or_else(|| DEFAULT_PLUGIN_VERSION.to_string()),
            description: self
                .description
                .unwrap_or_else(|| DEFAULT_PLUGIN_DESCRIPTION.to_string()),
            aliases: self.aliases,
            priority: self.priority,
            dependencies: self.dependencies,
            sessionable: self.sessionable,
        }
    }
}
