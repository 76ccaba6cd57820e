//! # DStone Core Kernel Errors
//!
//! Defines error types specific to the DStone kernel.
//!
//! This module includes [`Error`], the primary enum encompassing errors that
//! can surface at the orchestrator level: plugin system failures, UI bridge
//! failures, configuration loading problems, and lifecycle misuse.
use std::path::PathBuf;
use std::result::Result as StdResult;

use thiserror::Error as ThisError;

use crate::plugin_system::error::PluginSystemError;
use crate::ui_bridge::error::UiBridgeError;

/// Top-level error type for the DStone engine
#[derive(Debug, ThisError)]
pub enum Error {
    /// Typed plugin system error
    #[error("Plugin system error: {0}")]
    PluginSystem(#[from] PluginSystemError),

    /// UI bridge error
    #[error("UI bridge error: {0}")]
    UiBridge(#[from] UiBridgeError),

    /// Configuration loading or parsing failure
    #[error("Configuration error for '{path}': {message}")]
    Config {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Error occurring during a specific orchestrator lifecycle phase
    #[error("Kernel lifecycle error during {phase:?}: {message}")]
    KernelLifecycle {
        phase: KernelLifecyclePhase,
        message: String,
    },

    /// I/O failure with operation context
    #[error("I/O error during '{operation}' on '{}': {source}", path.display())]
    Io {
        #[source]
        source: std::io::Error,
        path: PathBuf,
        operation: String,
    },

    /// Generic error with message
    #[error("Error: {0}")]
    Other(String),
}

/// A phase in the orchestrator's lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelLifecyclePhase {
    Bootstrap,
    Run,
    Shutdown,
}

/// Shorthand for Result with our Error type
pub type Result<T> = StdResult<T, Error>;

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Other(msg.to_string())
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Other(msg)
    }
}

impl Error {
    /// Create an I/O error with operation context
    pub fn io(source: std::io::Error, operation: impl Into<String>, path: PathBuf) -> Self {
        Error::Io {
            source,
            operation: operation.into(),
            path,
        }
    }
}
