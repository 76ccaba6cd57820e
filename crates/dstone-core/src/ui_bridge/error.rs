//! # DStone Core UI Bridge Errors
//!
//! Defines error types specific to the UI bridge: provider lifecycle
//! failures and message delivery failures.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UiBridgeError {
    #[error("UI provider '{provider}' failed during '{method}': {message}")]
    LifecycleMethodFailed {
        provider: String,
        method: String, // e.g., "initialize", "update", "finalize"
        message: String,
    },

    #[error("UI provider '{provider}' failed to handle message: {message}")]
    MessageHandlingFailed {
        provider: String,
        message: String,
    },

    #[error("Multiple UI providers failed during operation")]
    MultipleProviderFailures(Vec<UiBridgeError>),

    #[error("UI bridge internal error: {0}")]
    InternalError(String),
}
