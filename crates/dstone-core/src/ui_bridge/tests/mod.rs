use std::sync::{Arc, Mutex as StdMutex};

use crate::ui_bridge::error::UiBridgeError;
use crate::ui_bridge::{MessageSeverity, UiManager, UiMessage, UiProvider, UiUpdateType};

// --- Recording provider for manager tests ---
struct RecordingProvider {
    name: &'static str,
    // (source, update) pairs in arrival order
    messages: Arc<StdMutex<Vec<(String, UiUpdateType)>>>,
    lifecycle: Arc<StdMutex<Vec<String>>>,
    fail_handle: bool,
}

impl RecordingProvider {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            messages: Arc::new(StdMutex::new(Vec::new())),
            lifecycle: Arc::new(StdMutex::new(Vec::new())),
            fail_handle: false,
        }
    }

    fn failing(mut self) -> Self {
        self.fail_handle = true;
        self
    }
}

impl UiProvider for RecordingProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    fn initialize(&mut self) -> Result<(), String> {
        self.lifecycle.lock().unwrap().push("initialize".to_string());
        Ok(())
    }

    fn handle_message(&mut self, message: &UiMessage) -> Result<(), String> {
        if self.fail_handle {
            return Err("handler down".to_string());
        }
        self.messages
            .lock()
            .unwrap()
            .push((message.source.clone(), message.update_type.clone()));
        Ok(())
    }

    fn update(&mut self) -> Result<(), String> {
        self.lifecycle.lock().unwrap().push("update".to_string());
        Ok(())
    }

    fn finalize(&mut self) -> Result<(), String> {
        self.lifecycle.lock().unwrap().push("finalize".to_string());
        Ok(())
    }
}

#[test]
fn broadcast_reaches_every_provider() {
    let first = RecordingProvider::new("first");
    let second = RecordingProvider::new("second");
    let first_messages = Arc::clone(&first.messages);
    let second_messages = Arc::clone(&second.messages);

    let mut manager = UiManager::new();
    manager.register_provider(Box::new(first));
    manager.register_provider(Box::new(second));
    assert_eq!(manager.provider_count(), 2);

    manager
        .broadcast("charts", UiUpdateType::Status("ready".to_string()))
        .unwrap();

    let expected = (
        "charts".to_string(),
        UiUpdateType::Status("ready".to_string()),
    );
    assert_eq!(*first_messages.lock().unwrap(), vec![expected.clone()]);
    assert_eq!(*second_messages.lock().unwrap(), vec![expected]);
}

#[test]
fn single_handler_failure_is_reported_directly() {
    let healthy = RecordingProvider::new("healthy");
    let healthy_messages = Arc::clone(&healthy.messages);

    let mut manager = UiManager::new();
    manager.register_provider(Box::new(RecordingProvider::new("broken").failing()));
    manager.register_provider(Box::new(healthy));

    let result = manager.broadcast("charts", UiUpdateType::Mount("overview".to_string()));
    assert!(matches!(
        result,
        Err(UiBridgeError::MessageHandlingFailed { ref provider, .. }) if provider == "broken"
    ));
    // The healthy provider still received the message.
    assert_eq!(healthy_messages.lock().unwrap().len(), 1);
}

#[test]
fn multiple_handler_failures_are_aggregated() {
    let mut manager = UiManager::new();
    manager.register_provider(Box::new(RecordingProvider::new("one").failing()));
    manager.register_provider(Box::new(RecordingProvider::new("two").failing()));

    let result = manager.broadcast("charts", UiUpdateType::Status("ready".to_string()));
    match result {
        Err(UiBridgeError::MultipleProviderFailures(failures)) => {
            assert_eq!(failures.len(), 2);
        }
        other => panic!("expected MultipleProviderFailures, got {:?}", other),
    }
}

#[test]
fn log_broadcasts_a_log_update() {
    let provider = RecordingProvider::new("sink");
    let messages = Arc::clone(&provider.messages);

    let mut manager = UiManager::new();
    manager.register_provider(Box::new(provider));
    manager
        .log("charts", MessageSeverity::Warning, "cache miss")
        .unwrap();

    assert_eq!(
        *messages.lock().unwrap(),
        vec![(
            "charts".to_string(),
            UiUpdateType::Log("cache miss".to_string(), MessageSeverity::Warning),
        )]
    );
}

#[test]
fn lifecycle_methods_fan_out() {
    let provider = RecordingProvider::new("sink");
    let lifecycle = Arc::clone(&provider.lifecycle);

    let mut manager = UiManager::new();
    manager.register_provider(Box::new(provider));
    manager.initialize_all().unwrap();
    manager.update_all().unwrap();
    manager.finalize_all().unwrap();

    assert_eq!(
        *lifecycle.lock().unwrap(),
        vec![
            "initialize".to_string(),
            "update".to_string(),
            "finalize".to_string()
        ]
    );
}

#[test]
fn console_manager_has_one_provider() {
    let manager = UiManager::with_console();
    assert_eq!(manager.provider_count(), 1);
}

#[test]
fn severity_levels_are_ordered() {
    assert!(MessageSeverity::Debug < MessageSeverity::Info);
    assert!(MessageSeverity::Info < MessageSeverity::Warning);
    assert!(MessageSeverity::Warning < MessageSeverity::Error);
}
