use async_trait::async_trait;
use serde_json::Value;

use crate::kernel::bootstrap::DStone;
use crate::plugin_system::descriptor::PluginDescriptor;
use crate::plugin_system::error::PluginSystemError;

/// Core trait that all plugins must implement.
///
/// Plugins are polymorphic over this capability set; the orchestrator never
/// inspects the concrete type beyond this trait. The `app` parameter passed
/// to [`initialize`](Plugin::initialize) and [`execute`](Plugin::execute) is
/// a non-owning back-reference to the orchestrator, giving plugins access to
/// shared host capabilities (logging, the UI mount point). The orchestrator
/// owns all plugins and outlives them.
#[async_trait]
pub trait Plugin: Send + Sync {
    /// Static identity and scheduling metadata for this plugin
    fn descriptor(&self) -> &PluginDescriptor;

    /// The unique name of the plugin (registry key)
    fn name(&self) -> &str {
        &self.descriptor().name
    }

    /// The version of the plugin
    fn version(&self) -> &str {
        &self.descriptor().version
    }

    /// The scheduling priority (lower value runs earlier among independent
    /// plugins)
    fn priority(&self) -> i32 {
        self.descriptor().priority
    }

    /// Names of plugins that must run before this one, in declaration order
    fn dependencies(&self) -> &[String] {
        &self.descriptor().dependencies
    }

    /// Check a configuration section before it is applied.
    ///
    /// The default accepts any configuration.
    fn validate_config(&self, _config: &Value) -> bool {
        true
    }

    /// Initialize the plugin with its configuration section.
    ///
    /// Called exactly once per plugin, after all of its dependencies have
    /// been initialized. Fails with
    /// [`PluginSystemError::ConfigurationError`] if the configuration is
    /// invalid.
    async fn initialize(&self, config: &Value, app: &mut DStone) -> Result<(), PluginSystemError>;

    /// Perform the plugin's unit of work.
    ///
    /// The scheduler guarantees at most one invocation per orchestrator run,
    /// after all of the plugin's dependencies have executed.
    async fn execute(&self, app: &mut DStone) -> Result<(), PluginSystemError>;

    /// Release any resources acquired in `initialize`/`execute`.
    ///
    /// Invoked when the plugin's scoped usage ends (see
    /// [`PluginRegistry::with_active_plugin`](crate::plugin_system::registry::PluginRegistry::with_active_plugin))
    /// and during orchestrator shutdown, on all exit paths.
    async fn cleanup(&self) -> Result<(), PluginSystemError> {
        Ok(())
    }
}
