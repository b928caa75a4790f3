/// Notifier port for user-facing status messages
///
/// This port abstracts transient notifications (progress, success,
/// failure) so they never interleave with payload output. Success and
/// failure must remain distinguishable outcomes for the caller.
pub trait Notifier {
    /// Reports an informational progress message
    fn info(&self, message: &str);

    /// Reports successful completion
    fn success(&self, message: &str);

    /// Reports a user-facing failure
    fn failure(&self, message: &str);
}
