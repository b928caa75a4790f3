use crate::application::read_models::{ComponentRow, ReportView};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for the component table
const TABLE_HEADER: &str = "| Component | Version | Pipeline | Status | Last MR |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|-----------|---------|----------|--------|---------|\n";

/// MarkdownFormatter adapter for table-style Markdown reports
///
/// Renders the report header as a heading plus two labeled summary
/// lines, followed by a five-column table with one row per visible
/// component. Rows follow catalog order; no sorting.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn render_header(&self, output: &mut String, view: &ReportView) {
        output.push_str(&format!("# {}\n", view.title));
        output.push_str(&format!("**Generated:** {}  \n", view.generated_on));
        output.push_str(&format!("**Components:** {}\n", view.component_count));
        output.push('\n');
    }

    fn render_row(&self, output: &mut String, row: &ComponentRow) {
        output.push_str(&format!(
            "| [{}]({}) | {} | {} ({}) | {} | [{}]({}) by {} |\n",
            Self::escape_table_cell(&row.name),
            row.repository_url,
            Self::escape_table_cell(&row.version),
            Self::escape_table_cell(&row.pipeline_id),
            row.pipeline_date,
            row.pipeline_status,
            Self::escape_table_cell(&row.merge_request_title),
            row.merge_request_url,
            Self::escape_table_cell(&row.merge_request_author),
        ));
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, view: &ReportView) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, view);

        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        for row in &view.components {
            self.render_row(&mut output, row);
        }

        Ok(output)
    }
}
