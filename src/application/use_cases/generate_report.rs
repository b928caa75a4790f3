use crate::application::dto::{ReportRequest, ReportResponse};
use crate::application::factories::FormatterFactory;
use crate::application::read_models::{ReportView, ReportViewBuilder};
use crate::ports::outbound::{CatalogLookup, Notifier};
use crate::reporting::domain::ReportPayload;
use crate::reporting::services::MilestoneSession;
use crate::shared::error::ReportError;
use crate::shared::Result;
use chrono::Local;

/// GenerateReportUseCase - Core use case for report generation
///
/// Orchestrates the report projection workflow: milestone lookup,
/// selection filtering, the empty-set guard, view building, and
/// format-specific rendering. Infrastructure dependencies are injected
/// generically through their ports.
///
/// # Type Parameters
/// * `C` - CatalogLookup implementation
/// * `N` - Notifier implementation
pub struct GenerateReportUseCase<C, N> {
    catalog: C,
    notifier: N,
}

impl<C, N> GenerateReportUseCase<C, N>
where
    C: CatalogLookup,
    N: Notifier,
{
    /// Creates a new GenerateReportUseCase with injected dependencies
    pub fn new(catalog: C, notifier: N) -> Self {
        Self { catalog, notifier }
    }

    /// Executes the report generation use case
    ///
    /// # Arguments
    /// * `request` - Report request with milestone, exclusions and format
    ///
    /// # Returns
    /// ReportResponse carrying the rendered payload and inclusion counts
    ///
    /// # Errors
    /// Fails with `ReportError::NoContent` when every component of the
    /// milestone is excluded (or the milestone has none); no payload is
    /// produced and no sink is invoked in that case.
    pub fn execute(&self, request: ReportRequest) -> Result<ReportResponse> {
        // Step 1: Select the milestone (lookup + fresh selection state)
        let mut session = MilestoneSession::new(&self.catalog);
        session.select_milestone(&request.milestone);
        self.notifier.info(&format!(
            "🔍 Looked up {} component(s) for milestone {}",
            session.catalog().len(),
            request.milestone
        ));

        // Step 2: Apply the requested exclusion toggles
        for name in &request.excluded_components {
            session.toggle(name);
        }

        // Step 3: Guard - refuse to render an empty document
        let visible = session.visible_components();
        if visible.is_empty() {
            return Err(ReportError::NoContent {
                milestone: request.milestone.clone(),
            }
            .into());
        }

        // Step 4: Build the view and render it
        let view = ReportViewBuilder::new()
            .milestone(&request.milestone)
            .generated_on(&Local::now().date_naive().to_string())
            .components(&visible)
            .build()?;

        self.notifier
            .info(FormatterFactory::progress_message(request.format));
        let payload = Self::render_payload(&view, request.format)?;

        // Count components actually removed from the catalog, not raw
        // toggles: a toggle of a name absent from the catalog is inert
        let excluded_count = session.catalog().len() - visible.len();

        Ok(ReportResponse::new(
            payload,
            request.format,
            visible.len(),
            excluded_count,
        ))
    }

    /// Renders the view and wraps it in the payload kind the format calls
    /// for: a named file for saved formats, a bare document for HTML.
    fn render_payload(
        view: &ReportView,
        format: crate::application::dto::OutputFormat,
    ) -> Result<ReportPayload> {
        let formatter = FormatterFactory::create(format);
        let content = formatter.format(view)?;

        let payload = match (format.extension(), format.mime_type()) {
            (Some(extension), Some(mime_type)) => ReportPayload::File {
                filename: format!("{}.{}", view.title, extension),
                content,
                mime_type: mime_type.to_string(),
            },
            _ => ReportPayload::Document { markup: content },
        };
        Ok(payload)
    }
}
