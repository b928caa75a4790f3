use crate::application::read_models::ReportView;
use crate::shared::Result;

/// ReportFormatter port for rendering report output
///
/// This port abstracts the rendering logic for the supported output
/// encodings (plain text, Markdown table, printable HTML).
///
/// Implementations must be pure functions of the view: rendering the same
/// view twice yields byte-identical output.
pub trait ReportFormatter {
    /// Renders the report view into the target encoding
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn format(&self, view: &ReportView) -> Result<String>;
}
