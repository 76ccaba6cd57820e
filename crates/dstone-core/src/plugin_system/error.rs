//! # DStone Core Plugin System Errors
//!
//! Defines error types specific to the DStone plugin system.
//!
//! This module includes [`PluginSystemError`], the primary enum encompassing
//! errors that can occur during plugin operations: registration, manifest
//! parsing, dependency resolution, configuration validation, execution, and
//! cleanup failures.
use std::path::PathBuf;
use crate::plugin_system::dependency::DependencyError;

#[derive(Debug, thiserror::Error)]
pub enum PluginSystemError {
    #[error("Plugin loading failed for '{plugin_id}': {source}")]
    LoadingError {
        plugin_id: String,
        path: Option<PathBuf>,
        #[source]
        source: Box<PluginSystemErrorSource>,
    },

    #[error("Plugin manifest error for '{path}': {message}")]
    ManifestError {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Plugin registration error for '{plugin_id}': {message}")]
    RegistrationError {
        plugin_id: String,
        message: String,
    },

    #[error("Plugin initialization error for '{plugin_id}': {message}")]
    InitializationError {
        plugin_id: String,
        message: String,
        #[source]
        source: Option<Box<PluginSystemErrorSource>>,
    },

    /// A plugin rejected its configuration section. Scoped to that plugin;
    /// sibling plugins keep initializing.
    #[error("Plugin configuration rejected for '{plugin_id}': {message}")]
    ConfigurationError {
        plugin_id: String,
        message: String,
    },

    /// Aggregate of per-plugin configuration failures collected by
    /// `initialize_all` after all siblings were attempted.
    #[error("{} plugin(s) rejected their configuration", .0.len())]
    ConfigurationFailures(Vec<PluginSystemError>),

    #[error("Plugin execution error for '{plugin_id}': {message}")]
    ExecutionError {
        plugin_id: String,
        message: String,
        #[source]
        source: Option<Box<PluginSystemErrorSource>>,
    },

    #[error("Plugin cleanup error for '{plugin_id}': {message}")]
    CleanupError {
        plugin_id: String,
        message: String,
    },

    #[error("Dependency resolution failed: {0}")]
    DependencyResolution(#[from] DependencyError),

    #[error("Internal plugin system error: {0}")]
    InternalError(String),
}

impl PluginSystemError {
    /// Shorthand for an execution failure without an underlying source.
    pub fn execution(plugin_id: &str, message: impl Into<String>) -> Self {
        PluginSystemError::ExecutionError {
            plugin_id: plugin_id.to_string(),
            message: message.into(),
            source: None,
        }
    }

    /// Shorthand for a configuration rejection.
    pub fn configuration(plugin_id: &str, message: impl Into<String>) -> Self {
        PluginSystemError::ConfigurationError {
            plugin_id: plugin_id.to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PluginSystemErrorSource {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("Other: {0}")]
    Other(String),
}
