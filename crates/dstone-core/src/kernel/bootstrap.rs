use std::path::Path;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::kernel::config::DStoneConfig;
use crate::kernel::constants;
use crate::kernel::error::{Error, KernelLifecyclePhase, Result};
use crate::plugin_system::descriptor::PluginDescriptor;
use crate::plugin_system::loader::PluginLoader;
use crate::plugin_system::registry::PluginRegistry;
use crate::plugin_system::scheduler::ExecutionScheduler;
use crate::plugin_system::traits::Plugin;
use crate::ui_bridge::{UiManager, UiUpdateType};

/// DStone orchestrator: the composition root of the engine.
///
/// Owns the plugin registry, the discovery loader, and the UI manager.
/// Plugins receive a `&mut DStone` during initialization and execution as
/// their non-owning host back-reference; the orchestrator outlives every
/// plugin it holds.
pub struct DStone {
    config: DStoneConfig,
    // Registry shared behind a mutex so plugins holding the host
    // back-reference never alias the locked registry directly.
    registry: Arc<Mutex<PluginRegistry>>,
    loader: PluginLoader,
    ui: UiManager,
    discovered: bool,
    ran: bool,
}

impl DStone {
    /// Create a new orchestrator from loaded configuration, with the
    /// default console UI provider.
    pub fn new(config: DStoneConfig) -> Result<Self> {
        Self::with_ui(config, UiManager::with_console())
    }

    /// Create a new orchestrator with a caller-supplied UI manager.
    pub fn with_ui(config: DStoneConfig, mut ui: UiManager) -> Result<Self> {
        log::info!(
            "Initializing {} v{}",
            constants::APP_NAME,
            constants::APP_VERSION
        );
        log::info!("Plugins directory: {}", config.dstone.plugins_dir.display());
        log::info!("Assets directory: {}", config.dstone.assets_dir.display());

        ui.initialize_all()?;

        Ok(Self {
            config,
            registry: Arc::new(Mutex::new(PluginRegistry::new())),
            loader: PluginLoader::new(),
            ui,
            discovered: false,
            ran: false,
        })
    }

    /// Register a plugin factory under an entry-point name, making it
    /// available to discovery.
    pub fn register_factory<F>(&mut self, entry_point: &str, factory: F)
    where
        F: Fn(PluginDescriptor) -> Arc<dyn Plugin> + Send + Sync + 'static,
    {
        self.loader.register_factory(entry_point, factory);
    }

    /// Register an already-constructed plugin directly, bypassing discovery.
    pub async fn register_plugin(&self, plugin: Arc<dyn Plugin>) -> Result<()> {
        let mut registry = self.registry.lock().await;
        registry.register_plugin(plugin)?;
        Ok(())
    }

    /// Discover plugin packages under the configured plugins directory.
    ///
    /// A missing plugins directory is not an error: the dashboard simply
    /// starts without discovered plugins.
    pub async fn discover_plugins(&mut self) -> Result<usize> {
        let plugins_dir = self.config.dstone.plugins_dir.clone();
        if !plugins_dir.is_dir() {
            log::warn!(
                "Plugins directory {} does not exist; skipping discovery",
                plugins_dir.display()
            );
            self.discovered = true;
            return Ok(0);
        }

        let registry = Arc::clone(&self.registry);
        let mut registry = registry.lock().await;
        let count = self
            .loader
            .discover_plugins(&plugins_dir, &mut registry)
            .await?;
        log::info!("Discovered {} plugin(s)", count);
        self.discovered = true;
        Ok(count)
    }

    /// Initialize every registered plugin, dependencies first.
    ///
    /// Hooks run against a registry snapshot, so the shared registry stays
    /// unlocked and plugins may reach it through the host back-reference.
    /// Plugins registered from inside a hook take part from the next pass.
    pub async fn initialize_all_plugins(&mut self) -> Result<()> {
        let configs = self.config.plugins.clone();
        let mut snapshot = self.registry.lock().await.clone();
        let result = snapshot.initialize_all(self, &configs).await;
        // Adopt whatever the snapshot initialized, even on a partial failure.
        self.registry.lock().await.merge_initialized_from(&snapshot);
        result?;
        Ok(())
    }

    /// Execute every registered plugin once, in priority order with
    /// dependencies strictly first. Fail-fast: the first plugin failure
    /// aborts the remaining schedule.
    ///
    /// Like initialization, execution runs against a registry snapshot so
    /// plugin hooks can use the registry without deadlocking.
    pub async fn execute_all_plugins(&mut self) -> Result<()> {
        let snapshot = self.registry.lock().await.clone();
        let mut scheduler = ExecutionScheduler::new();
        scheduler.execute_all(&snapshot, self).await?;
        Ok(())
    }

    /// Run the dashboard: discover (if not yet done), initialize all
    /// plugins, execute all plugins, then hand control to the UI host.
    ///
    /// Not re-entrant; calling `run` a second time on the same instance is
    /// a lifecycle error.
    pub async fn run(&mut self, debug: bool, reload: bool) -> Result<()> {
        if self.ran {
            return Err(Error::KernelLifecycle {
                phase: KernelLifecyclePhase::Run,
                message: "orchestrator already ran".to_string(),
            });
        }
        self.ran = true;

        if !self.discovered {
            self.discover_plugins().await?;
        }

        self.initialize_all_plugins().await?;
        self.execute_all_plugins().await?;

        // Hand over to the UI host for serving. Rendering internals are the
        // host's concern, not the engine's.
        self.ui.broadcast(
            constants::APP_NAME,
            UiUpdateType::Status(format!(
                "Dashboard ready (debug={}, reload={})",
                debug, reload
            )),
        )?;
        self.ui.update_all()?;
        Ok(())
    }

    /// Clean up all plugins (reverse initialization order) and finalize the
    /// UI host.
    pub async fn shutdown(&mut self) -> Result<()> {
        log::info!("Shutting down {}...", constants::APP_NAME);
        let registry = Arc::clone(&self.registry);
        {
            let mut registry = registry.lock().await;
            registry.shutdown_all().await?;
        }
        self.ui.finalize_all()?;
        Ok(())
    }

    /// Shared handle to the plugin registry
    pub fn registry(&self) -> &Arc<Mutex<PluginRegistry>> {
        &self.registry
    }

    /// The UI manager, the mount point plugins publish into
    pub fn ui(&self) -> &UiManager {
        &self.ui
    }

    /// Mutable access to the UI manager for plugins holding the host
    /// back-reference
    pub fn ui_mut(&mut self) -> &mut UiManager {
        &mut self.ui
    }

    /// Directory holding static assets for the UI host
    pub fn assets_dir(&self) -> &Path {
        &self.config.dstone.assets_dir
    }

    /// The loaded configuration
    pub fn config(&self) -> &DStoneConfig {
        &self.config
    }

    /// Whether `run` has completed or is in progress
    pub fn has_run(&self) -> bool {
        self.ran
    }
}
