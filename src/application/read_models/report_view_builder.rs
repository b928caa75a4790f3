use crate::application::read_models::{ComponentRow, ReportView};
use crate::reporting::domain::ComponentRecord;
use crate::shared::error::ReportError;
use crate::shared::Result;

/// Builder for [`ReportView`]
///
/// Flattens domain records into display-ready rows and stamps the report
/// title and generation date. Validation failures surface as
/// `ReportError::Validation`.
#[derive(Debug, Default)]
pub struct ReportViewBuilder {
    milestone: Option<String>,
    generated_on: Option<String>,
    components: Vec<ComponentRecord>,
}

impl ReportViewBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn milestone(mut self, milestone: &str) -> Self {
        self.milestone = Some(milestone.to_string());
        self
    }

    pub fn generated_on(mut self, generated_on: &str) -> Self {
        self.generated_on = Some(generated_on.to_string());
        self
    }

    pub fn components(mut self, components: &[ComponentRecord]) -> Self {
        self.components = components.to_vec();
        self
    }

    /// Builds the view. The milestone and generation date are required;
    /// the component list may be empty (the NoContent guard belongs to
    /// the use case, not the view).
    pub fn build(self) -> Result<ReportView> {
        let milestone = self.milestone.ok_or_else(|| ReportError::Validation {
            message: "report view requires a milestone".to_string(),
        })?;
        let generated_on = self.generated_on.ok_or_else(|| ReportError::Validation {
            message: "report view requires a generation date".to_string(),
        })?;

        let components: Vec<ComponentRow> = self
            .components
            .iter()
            .map(|record| ComponentRow {
                name: record.name.clone(),
                version: record.version.clone(),
                repository_url: record.repository_url.clone(),
                pipeline_id: record.last_pipeline.id.clone(),
                pipeline_status: record.last_pipeline.status.as_str().to_string(),
                pipeline_date: record.last_pipeline.date.to_string(),
                merge_request_title: record.last_merge_request.title.clone(),
                merge_request_url: record.last_merge_request.url.clone(),
                merge_request_author: record.last_merge_request.author.clone(),
            })
            .collect();

        Ok(ReportView {
            title: format!("Deployment Report — {}", milestone),
            generated_on,
            component_count: components.len(),
            components,
        })
    }
}
