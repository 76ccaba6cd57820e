//! # DStone Core Plugin System
//!
//! Infrastructure for extending a DStone dashboard through statically
//! registered plugins. Covers the full plugin lifecycle: discovery of plugin
//! packages, manifest parsing, registration, dependency-first
//! initialization, and priority-aware execution.
//!
//! ## Key Submodules and Responsibilities:
//!
//! - **[`descriptor`]**: The [`PluginDescriptor`] value type describing one
//!   plugin's identity, priority, and declared dependencies.
//! - **[`traits`]**: The [`Plugin`] capability contract all plugins
//!   implement.
//! - **[`registry`]**: The [`PluginRegistry`] mapping names to plugin
//!   instances, with dependency-first initialization and cycle detection.
//! - **[`scheduler`]**: The [`ExecutionScheduler`] driving the
//!   priority-ordered, dependency-respecting execution pass.
//! - **[`manifest`]**: The `plugin.json` metadata format for plugin
//!   packages ([`PluginManifest`]).
//! - **[`loader`]**: The [`PluginLoader`] registration table and directory
//!   discovery.
//! - **[`dependency`]**: Typed dependency-resolution errors.
//! - **[`error`]**: The plugin system error taxonomy
//!   ([`PluginSystemError`](error::PluginSystemError)).
pub mod dependency;
pub mod descriptor;
pub mod error;
pub mod loader;
pub mod manifest;
pub mod registry;
pub mod scheduler;
pub mod traits;

pub use dependency::DependencyError;
pub use descriptor::PluginDescriptor;
pub use loader::{PluginFactory, PluginLoader};
pub use manifest::PluginManifest;
pub use registry::{PluginInfo, PluginRegistry};
pub use scheduler::ExecutionScheduler;
pub use traits::Plugin;
// Test module declaration
#[cfg(test)]
mod tests;
