use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tempfile::tempdir;

use crate::kernel::bootstrap::DStone;
use crate::plugin_system::descriptor::PluginDescriptor;
use crate::plugin_system::error::PluginSystemError;
use crate::plugin_system::loader::PluginLoader;
use crate::plugin_system::registry::PluginRegistry;
use crate::plugin_system::traits::Plugin;

// --- Minimal plugin for discovery tests ---
struct DiscoveredPlugin {
    descriptor: PluginDescriptor,
}

#[async_trait]
impl Plugin for DiscoveredPlugin {
    fn descriptor(&self) -> &PluginDescriptor {
        &self.descriptor
    }

    async fn initialize(&self, _config: &Value, _app: &mut DStone) -> Result<(), PluginSystemError> {
        Ok(())
    }

    async fn execute(&self, _app: &mut DStone) -> Result<(), PluginSystemError> {
        Ok(())
    }
}

fn factory(descriptor: PluginDescriptor) -> Arc<dyn Plugin> {
    Arc::new(DiscoveredPlugin { descriptor })
}

fn write_manifest(dir: &Path, name: &str, content: &str) {
    let package_dir = dir.join(name);
    std::fs::create_dir(&package_dir).unwrap();
    std::fs::write(package_dir.join("plugin.json"), content).unwrap();
}

#[tokio::test]
async fn discovers_packages_with_manifests() {
    let root = tempdir().unwrap();
    write_manifest(
        root.path(),
        "charts",
        r#"{"priority": 2, "dependencies": ["datasource"]}"#,
    );
    write_manifest(root.path(), "datasource", r#"{"version": "1.3"}"#);

    let mut loader = PluginLoader::new();
    loader.register_factory("charts", factory);
    loader.register_factory("datasource", factory);

    let mut registry = PluginRegistry::new();
    let count = loader
        .discover_plugins(root.path(), &mut registry)
        .await
        .unwrap();

    assert_eq!(count, 2);
    // Sorted directory order, not filesystem order.
    assert_eq!(
        registry.plugin_names(),
        vec!["charts".to_string(), "datasource".to_string()]
    );
    let charts = registry.get_plugin("charts").unwrap();
    assert_eq!(charts.priority(), 2);
    assert_eq!(charts.dependencies(), ["datasource".to_string()]);
    assert_eq!(registry.get_plugin("datasource").unwrap().version(), "1.3");
}

#[tokio::test]
async fn entry_point_field_overrides_directory_name() {
    let root = tempdir().unwrap();
    write_manifest(root.path(), "charts", r#"{"entry_point": "chart_impl"}"#);

    let mut loader = PluginLoader::new();
    loader.register_factory("chart_impl", factory);

    let mut registry = PluginRegistry::new();
    let count = loader
        .discover_plugins(root.path(), &mut registry)
        .await
        .unwrap();

    assert_eq!(count, 1);
    // The plugin name stays the directory name.
    assert!(registry.has_plugin("charts"));
}

#[tokio::test]
async fn directory_without_manifest_is_skipped() {
    let root = tempdir().unwrap();
    std::fs::create_dir(root.path().join("not-a-plugin")).unwrap();
    write_manifest(root.path(), "charts", "{}");

    let mut loader = PluginLoader::new();
    loader.register_factory("charts", factory);

    let mut registry = PluginRegistry::new();
    let count = loader
        .discover_plugins(root.path(), &mut registry)
        .await
        .unwrap();

    assert_eq!(count, 1);
    assert!(registry.has_plugin("charts"));
    assert!(!registry.has_plugin("not-a-plugin"));
}

#[tokio::test]
async fn invalid_manifest_is_skipped() {
    let root = tempdir().unwrap();
    write_manifest(root.path(), "broken", "{not json");
    write_manifest(root.path(), "charts", "{}");

    let mut loader = PluginLoader::new();
    loader.register_factory("broken", factory);
    loader.register_factory("charts", factory);

    let mut registry = PluginRegistry::new();
    let count = loader
        .discover_plugins(root.path(), &mut registry)
        .await
        .unwrap();

    assert_eq!(count, 1);
    assert!(registry.has_plugin("charts"));
}

#[tokio::test]
async fn unknown_entry_point_is_skipped() {
    let root = tempdir().unwrap();
    write_manifest(root.path(), "charts", "{}");

    let loader = PluginLoader::new();
    let mut registry = PluginRegistry::new();
    let count = loader
        .discover_plugins(root.path(), &mut registry)
        .await
        .unwrap();

    assert_eq!(count, 0);
    assert_eq!(registry.plugin_count(), 0);
}

#[tokio::test]
async fn missing_plugin_root_is_an_error() {
    let root = tempdir().unwrap();
    let missing = root.path().join("no-such-dir");

    let loader = PluginLoader::new();
    let mut registry = PluginRegistry::new();
    let result = loader.discover_plugins(&missing, &mut registry).await;

    assert!(matches!(
        result,
        Err(PluginSystemError::LoadingError { .. })
    ));
}

#[tokio::test]
async fn duplicate_discovered_name_is_an_error() {
    let root = tempdir().unwrap();
    write_manifest(root.path(), "charts", "{}");

    let mut loader = PluginLoader::new();
    loader.register_factory("charts", factory);

    let mut registry = PluginRegistry::new();
    registry
        .register_plugin(factory(PluginDescriptor::new("charts")))
        .unwrap();

    let result = loader.discover_plugins(root.path(), &mut registry).await;
    assert!(matches!(
        result,
        Err(PluginSystemError::RegistrationError { ref plugin_id, .. }) if plugin_id == "charts"
    ));
}

#[test]
fn factory_table_bookkeeping() {
    let mut loader = PluginLoader::new();
    assert_eq!(loader.factory_count(), 0);
    loader.register_factory("charts", factory);
    assert!(loader.has_factory("charts"));
    assert!(!loader.has_factory("datasource"));
    assert_eq!(loader.factory_count(), 1);
}
