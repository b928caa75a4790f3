//! Report view structs for the formatters
//!
//! The view carries everything a formatter needs, including the
//! generation timestamp, so formatters stay pure: rendering the same
//! view twice is byte-identical.

/// Flattened view of one component row, in display-ready strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRow {
    pub name: String,
    pub version: String,
    pub repository_url: String,
    pub pipeline_id: String,
    pub pipeline_status: String,
    pub pipeline_date: String,
    pub merge_request_title: String,
    pub merge_request_url: String,
    pub merge_request_author: String,
}

/// The complete report view handed to a formatter
///
/// Rows follow catalog order; the formatters never sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportView {
    /// Report title, "Deployment Report — {milestone}"
    pub title: String,
    /// Local calendar date the report was generated on
    pub generated_on: String,
    /// Number of included components
    pub component_count: usize,
    pub components: Vec<ComponentRow>,
}
