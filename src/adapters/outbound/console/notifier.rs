use crate::ports::outbound::Notifier;
use owo_colors::OwoColorize;

/// StderrNotifier adapter for user-facing status messages
///
/// Implements the Notifier port by writing to stderr so notifications
/// never interleave with report payloads on stdout.
pub struct StderrNotifier;

impl StderrNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StderrNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for StderrNotifier {
    fn info(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn success(&self, message: &str) {
        eprintln!("{}", message.green());
    }

    fn failure(&self, message: &str) {
        eprintln!("{}", message.red());
    }
}
