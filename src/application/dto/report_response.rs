use crate::application::dto::OutputFormat;
use crate::reporting::domain::ReportPayload;

/// ReportResponse - Internal response DTO from report generation
///
/// Carries the rendered payload plus the counts the caller needs for its
/// success notification.
#[derive(Debug, Clone)]
pub struct ReportResponse {
    /// The rendered, delivery-ready payload
    pub payload: ReportPayload,
    /// Encoding the payload was rendered in
    pub format: OutputFormat,
    /// Number of components included in the report
    pub component_count: usize,
    /// Number of catalog components excluded by the request
    pub excluded_count: usize,
}

impl ReportResponse {
    pub fn new(
        payload: ReportPayload,
        format: OutputFormat,
        component_count: usize,
        excluded_count: usize,
    ) -> Self {
        Self {
            payload,
            format,
            component_count,
            excluded_count,
        }
    }
}
