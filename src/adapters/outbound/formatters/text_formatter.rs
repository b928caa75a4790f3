use crate::application::read_models::{ComponentRow, ReportView};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// TextFormatter adapter for plain text reports
///
/// Renders the header block (title, generation date, component count)
/// followed by one labeled entry per component in catalog order. Entries
/// are separated by blank lines; no escaping is required.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    fn render_header(&self, output: &mut String, view: &ReportView) {
        output.push_str(&view.title);
        output.push('\n');
        output.push_str(&format!("Generated: {}\n", view.generated_on));
        output.push_str(&format!("Components: {}\n", view.component_count));
    }

    fn render_entry(&self, output: &mut String, row: &ComponentRow) {
        output.push_str(&format!("• {} ({})\n", row.name, row.version));
        output.push_str(&format!("  Repo: {}\n", row.repository_url));
        output.push_str(&format!(
            "  Pipeline: {} [{}] {}\n",
            row.pipeline_id, row.pipeline_status, row.pipeline_date
        ));
        output.push_str(&format!(
            "  Last MR: \"{}\" by {}\n",
            row.merge_request_title, row.merge_request_author
        ));
        output.push_str(&format!("  {}\n", row.merge_request_url));
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, view: &ReportView) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, view);

        for row in &view.components {
            output.push('\n');
            self.render_entry(&mut output, row);
        }

        Ok(output)
    }
}
