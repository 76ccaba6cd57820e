use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::kernel::bootstrap::DStone;
use crate::plugin_system::dependency::DependencyError;
use crate::plugin_system::error::PluginSystemError;
use crate::plugin_system::registry::PluginRegistry;
use crate::plugin_system::traits::Plugin;

/// Priority- and dependency-ordered execution of one orchestrator run.
///
/// The entry traversal visits plugins sorted ascending by priority (stable:
/// ties keep registration order); each visit executes the plugin's direct
/// dependencies first, depth-first in declaration order. Priority therefore
/// only orders plugins with no dependency relationship; a dependency always
/// executes strictly before its dependent, whatever the relative priorities.
///
/// A scheduler instance is scoped to a single run: the `executed` set
/// guarantees at-most-once execution per plugin per run. Execution is
/// sequential and fail-fast; the first plugin failure aborts the remaining
/// schedule with no rollback of already-executed plugins.
pub struct ExecutionScheduler {
    /// Plugins that already executed in this run
    executed: HashSet<String>,
    /// Chain of plugins currently being executed, for cycle detection
    path: Vec<String>,
}

impl ExecutionScheduler {
    /// Create a scheduler for a single run
    pub fn new() -> Self {
        Self {
            executed: HashSet::new(),
            path: Vec::new(),
        }
    }

    /// Names of the plugins executed so far, as a set
    pub fn executed(&self) -> &HashSet<String> {
        &self.executed
    }

    /// Execute every registered plugin once, dependencies before dependents.
    pub async fn execute_all(
        &mut self,
        registry: &PluginRegistry,
        app: &mut DStone,
    ) -> Result<(), PluginSystemError> {
        let mut plugins = registry.plugins_in_registration_order();
        // Stable sort: ties keep registration order.
        plugins.sort_by_key(|p| p.priority());

        for plugin in &plugins {
            self.execute_with_dependencies(plugin, registry, app)
                .await?;
        }
        Ok(())
    }

    /// Execute `plugin` after its direct dependencies, recursively.
    ///
    /// A no-op for plugins that already executed in this run. `path` tracks
    /// the current recursion chain so a dependency cycle raises a typed
    /// error instead of recursing unboundedly.
    fn execute_with_dependencies<'a>(
        &'a mut self,
        plugin: &'a Arc<dyn Plugin>,
        registry: &'a PluginRegistry,
        app: &'a mut DStone,
    ) -> Pin<Box<dyn Future<Output = Result<(), PluginSystemError>> + Send + 'a>> {
        Box::pin(async move {
            let name = plugin.name().to_string();

            if self.executed.contains(&name) {
                return Ok(()); // At most once per run
            }
            if self.path.iter().any(|p| p == &name) {
                return Err(DependencyError::cycle_from_path(&self.path, &name).into());
            }
            self.path.push(name.clone());

            // Dependency edges are canonical names only, matching resolution.
            for dep in plugin.dependencies().to_vec() {
                let dep_plugin = registry.get_plugin_exact(&dep).ok_or_else(|| {
                    DependencyError::MissingDependency {
                        plugin: name.clone(),
                        dependency: dep.clone(),
                    }
                })?;
                self.execute_with_dependencies(&dep_plugin, registry, app)
                    .await?;
            }

            log::debug!("Executing plugin: {}", name);
            plugin.execute(app).await?;
            log::info!("Plugin executed: {}", name);

            self.path.pop();
            self.executed.insert(name);
            Ok(())
        })
    }
}

impl Default for ExecutionScheduler {
    fn default() -> Self {
        Self::new()
    }
}
