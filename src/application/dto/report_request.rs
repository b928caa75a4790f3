use crate::application::dto::OutputFormat;

/// ReportRequest - Internal request DTO for report generation
///
/// One request corresponds to one export action: a milestone, the set of
/// component names toggled off for this session, and the target encoding.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Milestone identifier to report on
    pub milestone: String,
    /// Component names to exclude from the report
    pub excluded_components: Vec<String>,
    /// Requested output encoding
    pub format: OutputFormat,
}

impl ReportRequest {
    pub fn new(milestone: String, excluded_components: Vec<String>, format: OutputFormat) -> Self {
        Self {
            milestone,
            excluded_components,
            format,
        }
    }
}
