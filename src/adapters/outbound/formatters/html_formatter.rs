use crate::application::read_models::{ComponentRow, ReportView};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Inlined minimal styling for the printable document
const STYLE: &str = "body{font-family:sans-serif;padding:40px;color:#222}\
table{width:100%;border-collapse:collapse;margin-top:20px}\
th,td{border:1px solid #ddd;padding:8px;text-align:left;font-size:13px}\
th{background:#f5f5f5}";

/// HtmlFormatter adapter for the printable report document
///
/// Produces a complete, self-contained HTML document with the same
/// header and five-column table as the Markdown format, using hyperlinks
/// for the component name and merge-request title. The document carries
/// no print-trigger script: presentation, printing, and any PDF
/// conversion belong to the delivery sink and the host environment.
pub struct HtmlFormatter;

impl HtmlFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes text for use in HTML text nodes and attribute values
    fn escape(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
    }

    fn render_head(&self, output: &mut String, view: &ReportView) {
        output.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        output.push_str(&format!("<title>{}</title>\n", Self::escape(&view.title)));
        output.push_str(&format!("<style>{}</style>\n", STYLE));
        output.push_str("</head>\n<body>\n");
    }

    fn render_header(&self, output: &mut String, view: &ReportView) {
        output.push_str(&format!("<h1>{}</h1>\n", Self::escape(&view.title)));
        output.push_str(&format!(
            "<p>Generated: {} — {} components</p>\n",
            Self::escape(&view.generated_on),
            view.component_count
        ));
    }

    fn render_row(&self, output: &mut String, row: &ComponentRow) {
        output.push_str(&format!(
            "<tr><td><a href=\"{}\">{}</a></td><td>{}</td><td>{} ({})</td><td>{}</td><td><a href=\"{}\">{}</a> by {}</td></tr>\n",
            Self::escape(&row.repository_url),
            Self::escape(&row.name),
            Self::escape(&row.version),
            Self::escape(&row.pipeline_id),
            Self::escape(&row.pipeline_date),
            Self::escape(&row.pipeline_status),
            Self::escape(&row.merge_request_url),
            Self::escape(&row.merge_request_title),
            Self::escape(&row.merge_request_author),
        ));
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for HtmlFormatter {
    fn format(&self, view: &ReportView) -> Result<String> {
        let mut output = String::new();
        self.render_head(&mut output, view);
        self.render_header(&mut output, view);

        output.push_str("<table>\n");
        output.push_str(
            "<tr><th>Component</th><th>Version</th><th>Pipeline</th><th>Status</th><th>Last MR</th></tr>\n",
        );
        for row in &view.components {
            self.render_row(&mut output, row);
        }
        output.push_str("</table>\n</body>\n</html>\n");

        Ok(output)
    }
}
