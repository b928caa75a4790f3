use crate::shared::Result;

/// DeliverySink port for handing rendered payloads to the host
///
/// This port abstracts the delivery mechanism for finished reports:
/// saving a named file payload or presenting a markup document to the
/// host's display/print pipeline. Document generation stays pure; any
/// presentation side effect lives entirely behind this port.
pub trait DeliverySink {
    /// Saves a named payload
    ///
    /// # Errors
    /// Returns an error if writing to the destination fails
    fn save(&self, filename: &str, content: &str, mime_type: &str) -> Result<()>;

    /// Presents a self-contained markup document to the host
    ///
    /// # Errors
    /// Returns an error if the document cannot be handed over
    fn present(&self, markup: &str) -> Result<()>;
}
