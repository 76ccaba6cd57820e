//! # DStone Core
//!
//! Core library for the DStone pluggable dashboard engine: plugin
//! discovery, registration, dependency-first initialization, and
//! priority-aware execution, plus the host capabilities (UI bridge,
//! helpers) plugins reach through the orchestrator back-reference.
pub mod kernel;
pub mod plugin_system;
pub mod ui_bridge;
pub mod utils;

// Re-export key public types for easier use by the binary and plugins
pub use kernel::bootstrap::DStone;
pub use kernel::config::DStoneConfig;
pub use kernel::error::Error as KernelError;
pub use plugin_system::{Plugin, PluginDescriptor, PluginLoader, PluginRegistry};
