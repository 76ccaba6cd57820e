//! Template plugin demonstrating the DStone plugin contract.
//!
//! Use this as a starting point when creating new plugins: implement
//! [`Plugin`], expose a factory for the registration table, and publish
//! into the host UI from `execute`.
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use dstone_core::kernel::bootstrap::DStone;
use dstone_core::plugin_system::descriptor::PluginDescriptor;
use dstone_core::plugin_system::error::PluginSystemError;
use dstone_core::plugin_system::traits::Plugin;
use dstone_core::ui_bridge::MessageSeverity;

/// Entry-point name the host registers this plugin's factory under.
pub const ENTRY_POINT: &str = "dummy";

/// A template plugin that logs its lifecycle and does no real work.
pub struct DummyPlugin {
    descriptor: PluginDescriptor,
}

impl DummyPlugin {
    /// Construct from a descriptor assembled by discovery
    pub fn new(descriptor: PluginDescriptor) -> Self {
        Self { descriptor }
    }

    /// Construct with the template's own metadata, for direct registration
    pub fn with_defaults() -> Self {
        Self::new(
            PluginDescriptor::new("dummy")
                .with_version("1.0")
                .with_description("A template plugin for demonstration"),
        )
    }
}

/// Factory for the host's registration table.
pub fn factory(descriptor: PluginDescriptor) -> Arc<dyn Plugin> {
    Arc::new(DummyPlugin::new(descriptor))
}

#[async_trait]
impl Plugin for DummyPlugin {
    fn descriptor(&self) -> &PluginDescriptor {
        &self.descriptor
    }

    fn validate_config(&self, config: &Value) -> bool {
        // Accept no config or a mapping; anything else is malformed.
        config.is_null() || config.is_object()
    }

    async fn initialize(&self, _config: &Value, _app: &mut DStone) -> Result<(), PluginSystemError> {
        log::info!("Initializing {}", self.name());
        Ok(())
    }

    async fn execute(&self, app: &mut DStone) -> Result<(), PluginSystemError> {
        let name = self.name().to_string();
        app.ui_mut()
            .log(&name, MessageSeverity::Info, "Executing dummy plugin")
            .map_err(|e| PluginSystemError::execution(&name, e.to_string()))?;
        Ok(())
    }

    async fn cleanup(&self) -> Result<(), PluginSystemError> {
        log::info!("Cleaning up {}", self.name());
        Ok(())
    }
}
