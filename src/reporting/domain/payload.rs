/// Rendered report output, ready for delivery.
///
/// A payload is derived from a report view and never mutated after
/// creation; every export request regenerates it from scratch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportPayload {
    /// A named file payload for formats that are saved (text, markdown)
    File {
        filename: String,
        content: String,
        mime_type: String,
    },
    /// A self-contained markup document for the printable format,
    /// presented to the host rather than saved under a filename
    Document { markup: String },
}

impl ReportPayload {
    /// The rendered content regardless of payload kind
    pub fn content(&self) -> &str {
        match self {
            ReportPayload::File { content, .. } => content,
            ReportPayload::Document { markup } => markup,
        }
    }

    /// The filename for saved payloads; `None` for presented documents
    pub fn filename(&self) -> Option<&str> {
        match self {
            ReportPayload::File { filename, .. } => Some(filename),
            ReportPayload::Document { .. } => None,
        }
    }
}
