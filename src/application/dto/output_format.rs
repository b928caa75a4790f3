/// Output format enumeration for report generation
///
/// This enum represents the supported output encodings for deployment
/// reports. It belongs in the application layer as it represents an
/// application-level concern that both the CLI (inbound adapter) and the
/// formatters (outbound adapters) need to understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text report (default)
    Text,
    /// Markdown table report
    Markdown,
    /// Self-contained printable HTML document
    Html,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "html" => Ok(OutputFormat::Html),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'text', 'markdown' or 'html'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Html => write!(f, "html"),
        }
    }
}

impl OutputFormat {
    /// File extension for saved formats; `None` for the presented HTML
    /// document, which carries no filename
    pub fn extension(&self) -> Option<&'static str> {
        match self {
            OutputFormat::Text => Some("txt"),
            OutputFormat::Markdown => Some("md"),
            OutputFormat::Html => None,
        }
    }

    /// MIME type for saved formats
    pub fn mime_type(&self) -> Option<&'static str> {
        match self {
            OutputFormat::Text => Some("text/plain"),
            OutputFormat::Markdown => Some("text/markdown"),
            OutputFormat::Html => None,
        }
    }
}
