use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tokio::fs;

use crate::plugin_system::descriptor::PluginDescriptor;
use crate::plugin_system::error::{PluginSystemError, PluginSystemErrorSource};
use crate::plugin_system::manifest::{PluginManifest, PLUGIN_MANIFEST_FILE};
use crate::plugin_system::registry::PluginRegistry;
use crate::plugin_system::traits::Plugin;

/// Constructor registered against an entry-point name.
///
/// Receives the descriptor assembled from the plugin directory's manifest
/// and returns the plugin instance to register.
pub type PluginFactory = Box<dyn Fn(PluginDescriptor) -> Arc<dyn Plugin> + Send + Sync>;

/// Discovers plugin packages and constructs them through a registration
/// table.
///
/// There is no runtime code loading: the host registers a factory for every
/// plugin entry point it links, and discovery matches `plugin.json`
/// manifests found under the plugin root against that table. A directory
/// without a recognizable manifest, or whose entry point has no registered
/// factory, is skipped with a warning; the scan continues.
pub struct PluginLoader {
    factories: HashMap<String, PluginFactory>,
}

impl PluginLoader {
    /// Create a loader with an empty registration table
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a factory under an entry-point name.
    ///
    /// A later registration for the same entry point replaces the earlier
    /// factory.
    pub fn register_factory<F>(&mut self, entry_point: &str, factory: F)
    where
        F: Fn(PluginDescriptor) -> Arc<dyn Plugin> + Send + Sync + 'static,
    {
        self.factories
            .insert(entry_point.to_string(), Box::new(factory));
    }

    /// Whether a factory is registered for this entry point
    pub fn has_factory(&self, entry_point: &str) -> bool {
        self.factories.contains_key(entry_point)
    }

    /// Number of registered factories
    pub fn factory_count(&self) -> usize {
        self.factories.len()
    }

    /// Discover plugin packages under `dir` and register them.
    ///
    /// Each immediate subdirectory is one candidate package; its name
    /// becomes the plugin name and its `plugin.json` manifest supplies the
    /// remaining descriptor fields. Subdirectories are visited in sorted
    /// name order so registration order is deterministic. Returns the
    /// number of plugins registered.
    ///
    /// Failing to read the plugin root itself is an error; per-package
    /// problems (missing or invalid manifest, unknown entry point, manifest
    /// read failure) are logged and the scan continues. Registering a
    /// duplicate name is an error.
    pub async fn discover_plugins(
        &self,
        dir: &Path,
        registry: &mut PluginRegistry,
    ) -> Result<usize, PluginSystemError> {
        let mut entries = fs::read_dir(dir).await.map_err(|e| {
            PluginSystemError::LoadingError {
                plugin_id: "<plugin root>".to_string(),
                path: Some(dir.to_path_buf()),
                source: Box::new(PluginSystemErrorSource::Io(e)),
            }
        })?;

        let mut package_dirs = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| {
            PluginSystemError::LoadingError {
                plugin_id: "<plugin root>".to_string(),
                path: Some(dir.to_path_buf()),
                source: Box::new(PluginSystemErrorSource::Io(e)),
            }
        })? {
            let path = entry.path();
            if path.is_dir() {
                package_dirs.push(path);
            }
        }
        package_dirs.sort();

        let mut count = 0;
        for package_dir in package_dirs {
            let Some(name) = package_dir
                .file_name()
                .and_then(|n| n.to_str())
                .map(str::to_string)
            else {
                log::warn!(
                    "Skipping plugin directory with non-UTF-8 name: {}",
                    package_dir.display()
                );
                continue;
            };

            let manifest_path = package_dir.join(PLUGIN_MANIFEST_FILE);
            let content = match fs::read_to_string(&manifest_path).await {
                Ok(content) => content,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    log::warn!(
                        "Plugin directory '{}' has no {}; skipping",
                        name,
                        PLUGIN_MANIFEST_FILE
                    );
                    continue;
                }
                Err(e) => {
                    log::warn!(
                        "Failed to read manifest for plugin '{}' ({}): {}; skipping",
                        name,
                        manifest_path.display(),
                        e
                    );
                    continue;
                }
            };

            let manifest = match PluginManifest::parse(&content, &manifest_path) {
                Ok(manifest) => manifest,
                Err(e) => {
                    log::warn!("Invalid manifest for plugin '{}': {}; skipping", name, e);
                    continue;
                }
            };

            let Some(factory) = self.factories.get(manifest.entry_point(&name)) else {
                log::warn!(
                    "No factory registered for entry point '{}' of plugin '{}'; skipping",
                    manifest.entry_point(&name),
                    name
                );
                continue;
            };

            let descriptor = manifest.into_descriptor(&name);
            log::info!("Discovered plugin: {}", descriptor);
            let plugin = factory(descriptor);
            registry.register_plugin(plugin)?;
            count += 1;
        }

        Ok(count)
    }
}

impl Default for PluginLoader {
    fn default() -> Self {
        Self::new()
    }
}
