use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::kernel::bootstrap::DStone;
use crate::plugin_system::dependency::DependencyError;
use crate::plugin_system::descriptor::PluginDescriptor;
use crate::plugin_system::error::PluginSystemError;
use crate::plugin_system::traits::Plugin;

/// Read-only projection of a plugin's identity and lifecycle state.
#[derive(Debug, Clone, Serialize)]
pub struct PluginInfo {
    pub descriptor: PluginDescriptor,
    pub initialized: bool,
}

/// Registry for managing plugins.
///
/// Owns the mapping from plugin name to plugin instance and the per-plugin
/// lifecycle state. Registration order is tracked explicitly so iteration,
/// discovery logging, and priority tie-breaks are deterministic.
///
/// Cloning produces a snapshot sharing the same plugin instances; the
/// orchestrator runs lifecycle hooks against a snapshot so the shared
/// registry stays unlocked while plugins hold the host back-reference.
#[derive(Clone)]
pub struct PluginRegistry {
    /// Registered plugins (Arc for shared ownership)
    plugins: HashMap<String, Arc<dyn Plugin>>,
    /// Registration order of plugin names
    order: Vec<String>,
    /// Alias -> canonical name lookup table
    aliases: HashMap<String, String>,
    /// Names of plugins that completed initialization
    initialized: HashSet<String>,
    /// Initialization completion order, used for reverse-order shutdown
    init_order: Vec<String>,
}

impl PluginRegistry {
    /// Create a new, empty plugin registry
    pub fn new() -> Self {
        Self {
            plugins: HashMap::new(),
            order: Vec::new(),
            aliases: HashMap::new(),
            initialized: HashSet::new(),
            init_order: Vec::new(),
        }
    }

    /// Register a plugin.
    ///
    /// Duplicate names are rejected with a registration error rather than
    /// silently overwriting the earlier entry.
    pub fn register_plugin(&mut self, plugin: Arc<dyn Plugin>) -> Result<(), PluginSystemError> {
        let name = plugin.name().to_string();

        if self.plugins.contains_key(&name) {
            return Err(PluginSystemError::RegistrationError {
                plugin_id: name.clone(),
                message: "a plugin with this name is already registered".to_string(),
            });
        }

        for alias in &plugin.descriptor().aliases {
            if self.plugins.contains_key(alias) || self.aliases.contains_key(alias) {
                log::warn!(
                    "Alias '{}' of plugin '{}' collides with an existing name; ignoring it",
                    alias,
                    name
                );
                continue;
            }
            self.aliases.insert(alias.clone(), name.clone());
        }

        log::info!("Registered plugin: {}", plugin.descriptor());
        self.order.push(name.clone());
        self.plugins.insert(name, plugin);
        Ok(())
    }

    /// Check if a plugin is registered under this canonical name
    pub fn has_plugin(&self, name: &str) -> bool {
        self.plugins.contains_key(name)
    }

    /// Resolve a name or alias to the canonical plugin name
    pub fn resolve_name<'a>(&'a self, name: &'a str) -> Option<&'a str> {
        if self.plugins.contains_key(name) {
            Some(name)
        } else {
            self.aliases.get(name).map(String::as_str)
        }
    }

    /// Get a plugin by name or alias
    pub fn get_plugin(&self, name: &str) -> Option<Arc<dyn Plugin>> {
        let canonical = self.resolve_name(name)?;
        self.plugins.get(canonical).cloned()
    }

    /// Get a plugin by canonical name; aliases do not resolve here.
    ///
    /// Dependency edges are canonical names only, so both the resolver and
    /// the scheduler look dependencies up through this method.
    pub fn get_plugin_exact(&self, name: &str) -> Option<Arc<dyn Plugin>> {
        self.plugins.get(name).cloned()
    }

    /// Iterate registered plugins in registration order
    pub fn iter_plugins(&self) -> impl Iterator<Item = &Arc<dyn Plugin>> {
        self.order.iter().filter_map(|name| self.plugins.get(name))
    }

    /// All registered plugins as a Vec, in registration order
    pub fn plugins_in_registration_order(&self) -> Vec<Arc<dyn Plugin>> {
        self.iter_plugins().cloned().collect()
    }

    /// Registered plugin names in registration order
    pub fn plugin_names(&self) -> Vec<String> {
        self.order.clone()
    }

    /// Number of registered plugins
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    /// Whether the named plugin completed initialization
    pub fn is_initialized(&self, name: &str) -> bool {
        self.initialized.contains(name)
    }

    /// Number of initialized plugins
    pub fn initialized_count(&self) -> usize {
        self.initialized.len()
    }

    /// Read-only snapshot of a plugin's descriptor and lifecycle state
    pub fn plugin_info(&self, name: &str) -> Option<PluginInfo> {
        let canonical = self.resolve_name(name)?;
        self.plugins.get(canonical).map(|p| PluginInfo {
            descriptor: p.descriptor().clone(),
            initialized: self.initialized.contains(canonical),
        })
    }

    /// Public entry point for initializing a single plugin.
    ///
    /// Initializes the plugin's declared dependencies first, depth-first in
    /// declaration order, then the plugin itself. Idempotent: a no-op for a
    /// plugin that is already initialized.
    pub async fn initialize_plugin(
        &mut self,
        name: &str,
        app: &mut DStone,
        configs: &HashMap<String, Value>,
    ) -> Result<(), PluginSystemError> {
        let mut path = Vec::new();
        self.initialize_plugin_recursive(name, app, configs, &mut path)
            .await
    }

    /// Internal recursive initialization with explicit cycle detection.
    ///
    /// `path` is the chain of plugins currently being resolved; revisiting a
    /// name on it is a dependency cycle and raises a typed error instead of
    /// exhausting the call stack.
    fn initialize_plugin_recursive<'a>(
        &'a mut self,
        name: &'a str,
        app: &'a mut DStone,
        configs: &'a HashMap<String, Value>,
        path: &'a mut Vec<String>,
    ) -> Pin<Box<dyn Future<Output = Result<(), PluginSystemError>> + Send + 'a>> {
        Box::pin(async move {
            let plugin = self
                .plugins
                .get(name)
                .cloned()
                .ok_or_else(|| DependencyError::PluginNotFound(name.to_string()))?;

            if self.initialized.contains(name) {
                return Ok(()); // Already initialized
            }

            if path.iter().any(|p| p == name) {
                return Err(DependencyError::cycle_from_path(path, name).into());
            }
            path.push(name.to_string());

            let dependencies = plugin.dependencies().to_vec();
            for dep in dependencies {
                if !self.plugins.contains_key(&dep) {
                    return Err(DependencyError::MissingDependency {
                        plugin: name.to_string(),
                        dependency: dep,
                    }
                    .into());
                }
                if !self.initialized.contains(&dep) {
                    self.initialize_plugin_recursive(&dep, app, configs, path)
                        .await?;
                }
            }

            // Apply the plugin's configuration section, if any.
            let section = configs.get(name).cloned().unwrap_or(Value::Null);
            if !plugin.validate_config(&section) {
                return Err(PluginSystemError::configuration(
                    name,
                    "validate_config rejected the configuration section",
                ));
            }

            log::debug!("Initializing plugin: {}", name);
            plugin.initialize(&section, app).await?;
            log::info!("Plugin initialized: {}", name);

            self.initialized.insert(name.to_string());
            self.init_order.push(name.to_string());
            path.pop();

            Ok(())
        })
    }

    /// Initialize every registered plugin, dependencies first.
    ///
    /// Iterates in registration order; plugins already initialized through a
    /// dependency edge are skipped. Missing-dependency and cycle errors are
    /// fatal immediately. A configuration rejection is scoped to the
    /// offending plugin: its siblings keep initializing and the collected
    /// failures are returned as one aggregate error afterwards.
    pub async fn initialize_all(
        &mut self,
        app: &mut DStone,
        configs: &HashMap<String, Value>,
    ) -> Result<(), PluginSystemError> {
        let mut failures: Vec<PluginSystemError> = Vec::new();
        let mut failed_ids: HashSet<String> = HashSet::new();

        for name in self.order.clone() {
            if self.initialized.contains(&name) {
                continue;
            }
            match self.initialize_plugin(&name, app, configs).await {
                Ok(()) => {}
                Err(PluginSystemError::ConfigurationError { plugin_id, message }) => {
                    log::warn!(
                        "Plugin '{}' rejected its configuration: {}",
                        plugin_id,
                        message
                    );
                    if failed_ids.insert(plugin_id.clone()) {
                        failures.push(PluginSystemError::ConfigurationError { plugin_id, message });
                    }
                }
                Err(e) => return Err(e),
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(PluginSystemError::ConfigurationFailures(failures))
        }
    }

    /// Merge initialization state recorded on a snapshot back into this
    /// registry.
    ///
    /// Names the snapshot initialized that are registered here and not yet
    /// marked are adopted in the snapshot's initialization order; anything
    /// else is ignored.
    pub fn merge_initialized_from(&mut self, snapshot: &PluginRegistry) {
        for name in &snapshot.init_order {
            if self.plugins.contains_key(name) && self.initialized.insert(name.clone()) {
                self.init_order.push(name.clone());
            }
        }
    }

    /// Run `f` against an initialized plugin, invoking `cleanup()` on every
    /// exit path once the scoped usage ends.
    ///
    /// A usage error takes precedence over a cleanup error; a cleanup error
    /// after successful usage is still surfaced.
    pub async fn with_active_plugin<T, F, Fut>(
        &self,
        name: &str,
        f: F,
    ) -> Result<T, PluginSystemError>
    where
        F: FnOnce(Arc<dyn Plugin>) -> Fut,
        Fut: Future<Output = Result<T, PluginSystemError>> + Send,
    {
        let canonical = self
            .resolve_name(name)
            .ok_or_else(|| DependencyError::PluginNotFound(name.to_string()))?
            .to_string();
        let plugin = self
            .plugins
            .get(&canonical)
            .cloned()
            .ok_or_else(|| DependencyError::PluginNotFound(canonical.clone()))?;

        if !self.initialized.contains(&canonical) {
            return Err(PluginSystemError::InitializationError {
                plugin_id: canonical,
                message: "plugin must be initialized before use".to_string(),
                source: None,
            });
        }

        let result = f(Arc::clone(&plugin)).await;
        let cleanup_result = plugin.cleanup().await;

        match (result, cleanup_result) {
            (Err(e), _) => Err(e),
            (Ok(_), Err(e)) => Err(e),
            (Ok(value), Ok(())) => Ok(value),
        }
    }

    /// Clean up all initialized plugins, in reverse initialization order.
    ///
    /// Cleanup continues past individual failures; the collected errors are
    /// reported once every plugin was attempted.
    pub async fn shutdown_all(&mut self) -> Result<(), PluginSystemError> {
        let mut errors = Vec::new();

        for name in self.init_order.iter().rev() {
            if let Some(plugin) = self.plugins.get(name) {
                log::info!("Cleaning up plugin: {}", name);
                if let Err(e) = plugin.cleanup().await {
                    log::error!("Error cleaning up plugin {}: {}", name, e);
                    errors.push(format!("{}: {}", name, e));
                }
            }
        }
        self.initialized.clear();
        self.init_order.clear();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(PluginSystemError::InternalError(format!(
                "Encountered errors during plugin cleanup: {}",
                errors.join("; ")
            )))
        }
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}
