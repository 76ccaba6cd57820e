//! # DStone Core UI Bridge
//!
//! The host capability surface plugins use to reach the user interface.
//! The engine never renders anything itself: it forwards [`UiMessage`]s to
//! registered [`UiProvider`]s, and a basic console provider ships as the
//! default sink. Rendering and layout are the providers' concern.
pub mod error;

use std::time::{SystemTime, UNIX_EPOCH};

pub use error::UiBridgeError;

/// UI message severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MessageSeverity {
    /// Debug information
    Debug,
    /// Informational message
    Info,
    /// Warning message
    Warning,
    /// Error message
    Error,
}

/// UI update type
#[derive(Debug, Clone, PartialEq)]
pub enum UiUpdateType {
    /// Status message
    Status(String),
    /// Log message
    Log(String, MessageSeverity),
    /// A named dashboard view contributed by a plugin (mount request)
    Mount(String),
}

/// UI message for communication with UI providers
#[derive(Debug, Clone)]
pub struct UiMessage {
    /// Message payload
    pub update_type: UiUpdateType,
    /// Source component (plugin name or the engine itself)
    pub source: String,
    /// Message timestamp
    pub timestamp: SystemTime,
}

/// Trait for UI providers
pub trait UiProvider: Send + Sync {
    /// Get the name of this provider
    fn name(&self) -> &'static str;

    /// Initialize the UI
    fn initialize(&mut self) -> Result<(), String>;

    /// Handle a UI message
    fn handle_message(&mut self, message: &UiMessage) -> Result<(), String>;

    /// Update the UI
    fn update(&mut self) -> Result<(), String>;

    /// Finalize/clean up the UI
    fn finalize(&mut self) -> Result<(), String>;
}

/// Basic console UI provider
struct ConsoleUiProvider {
    initialized: bool,
}

impl ConsoleUiProvider {
    fn new() -> Self {
        Self { initialized: false }
    }

    fn format_time(time: SystemTime) -> String {
        if let Ok(duration) = time.duration_since(UNIX_EPOCH) {
            let secs = duration.as_secs();
            format!(
                "{:02}:{:02}:{:02}",
                (secs / 3600) % 24,
                (secs / 60) % 60,
                secs % 60
            )
        } else {
            String::from("00:00:00")
        }
    }
}

impl UiProvider for ConsoleUiProvider {
    fn name(&self) -> &'static str {
        "console"
    }

    fn initialize(&mut self) -> Result<(), String> {
        self.initialized = true;
        Ok(())
    }

    fn handle_message(&mut self, message: &UiMessage) -> Result<(), String> {
        let msg_type = match &message.update_type {
            UiUpdateType::Status(msg) => format!("Status: {}", msg),
            UiUpdateType::Log(msg, severity) => format!("{:?}: {}", severity, msg),
            UiUpdateType::Mount(view) => format!("Mounted view: {}", view),
        };

        let time_str = Self::format_time(message.timestamp);
        println!("[{}] {}: {}", message.source, time_str, msg_type);
        Ok(())
    }

    fn update(&mut self) -> Result<(), String> {
        // Nothing to do for console UI
        Ok(())
    }

    fn finalize(&mut self) -> Result<(), String> {
        self.initialized = false;
        Ok(())
    }
}

/// Bridge between the engine and UI providers.
///
/// Owned by the orchestrator; plugins reach it through the host
/// back-reference to publish status, logs, and mount requests.
pub struct UiManager {
    providers: Vec<Box<dyn UiProvider>>,
}

impl UiManager {
    /// Create a manager with no providers
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Create a manager with the default console provider
    pub fn with_console() -> Self {
        let mut manager = Self::new();
        manager.register_provider(Box::new(ConsoleUiProvider::new()));
        manager
    }

    /// Register a UI provider
    pub fn register_provider(&mut self, provider: Box<dyn UiProvider>) {
        log::debug!("Registered UI provider: {}", provider.name());
        self.providers.push(provider);
    }

    /// Number of registered providers
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Initialize every provider
    pub fn initialize_all(&mut self) -> Result<(), UiBridgeError> {
        Self::for_each("initialize", &mut self.providers, |p| p.initialize())
    }

    /// Broadcast a message to every provider
    pub fn broadcast(
        &mut self,
        source: &str,
        update: UiUpdateType,
    ) -> Result<(), UiBridgeError> {
        let message = UiMessage {
            update_type: update,
            source: source.to_string(),
            timestamp: SystemTime::now(),
        };

        let mut failures = Vec::new();
        for provider in &mut self.providers {
            if let Err(e) = provider.handle_message(&message) {
                failures.push(UiBridgeError::MessageHandlingFailed {
                    provider: provider.name().to_string(),
                    message: e,
                });
            }
        }
        Self::collect(failures)
    }

    /// Publish a log line bound to a source name (typically a plugin)
    pub fn log(
        &mut self,
        source: &str,
        severity: MessageSeverity,
        text: &str,
    ) -> Result<(), UiBridgeError> {
        match severity {
            MessageSeverity::Debug => log::debug!(target: "dstone::plugin", "[{}] {}", source, text),
            MessageSeverity::Info => log::info!(target: "dstone::plugin", "[{}] {}", source, text),
            MessageSeverity::Warning => log::warn!(target: "dstone::plugin", "[{}] {}", source, text),
            MessageSeverity::Error => log::error!(target: "dstone::plugin", "[{}] {}", source, text),
        }
        self.broadcast(source, UiUpdateType::Log(text.to_string(), severity))
    }

    /// Update every provider
    pub fn update_all(&mut self) -> Result<(), UiBridgeError> {
        Self::for_each("update", &mut self.providers, |p| p.update())
    }

    /// Finalize every provider
    pub fn finalize_all(&mut self) -> Result<(), UiBridgeError> {
        Self::for_each("finalize", &mut self.providers, |p| p.finalize())
    }

    fn for_each(
        method: &str,
        providers: &mut [Box<dyn UiProvider>],
        mut op: impl FnMut(&mut dyn UiProvider) -> Result<(), String>,
    ) -> Result<(), UiBridgeError> {
        let mut failures = Vec::new();
        for provider in providers {
            if let Err(e) = op(provider.as_mut()) {
                failures.push(UiBridgeError::LifecycleMethodFailed {
                    provider: provider.name().to_string(),
                    method: method.to_string(),
                    message: e,
                });
            }
        }
        Self::collect(failures)
    }

    fn collect(mut failures: Vec<UiBridgeError>) -> Result<(), UiBridgeError> {
        match failures.len() {
            0 => Ok(()),
            1 => Err(failures.remove(0)),
            _ => Err(UiBridgeError::MultipleProviderFailures(failures)),
        }
    }
}

impl Default for UiManager {
    fn default() -> Self {
        Self::new()
    }
}

// Test module declaration
#[cfg(test)]
mod tests;
