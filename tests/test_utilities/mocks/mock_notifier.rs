use deploy_report::ports::outbound::Notifier;
use std::sync::{Arc, Mutex};

/// Mock implementation of the Notifier port that records every message
/// for later assertion. Clones share the same log, so a handle kept
/// outside a use case still sees everything the use case emitted.
#[derive(Default, Clone)]
pub struct MockNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for MockNotifier {
    fn info(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn success(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn failure(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
