use chrono::NaiveDate;
use deploy_report::ports::outbound::CatalogLookup;
use deploy_report::reporting::domain::{
    ComponentRecord, MergeRequest, PipelineRun, PipelineStatus,
};

/// Builds a fully populated component record for test catalogs.
pub fn component_record(name: &str, version: &str, status: PipelineStatus) -> ComponentRecord {
    let repository_url = format!("https://gitlab.com/org/{}", name);
    ComponentRecord {
        name: name.to_string(),
        version: version.to_string(),
        last_pipeline: PipelineRun {
            id: "#1000".to_string(),
            status,
            date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
        },
        last_merge_request: MergeRequest {
            title: format!("Update {}", name),
            url: format!("{}/-/merge_requests/1", repository_url),
            author: "jdoe".to_string(),
        },
        repository_url,
    }
}

/// Mock implementation of the CatalogLookup port backed by an in-memory
/// milestone list.
pub struct MockCatalog {
    milestones: Vec<(String, Vec<ComponentRecord>)>,
}

impl MockCatalog {
    pub fn new(milestones: Vec<(String, Vec<ComponentRecord>)>) -> Self {
        Self { milestones }
    }
}

impl CatalogLookup for MockCatalog {
    fn lookup(&self, milestone: &str) -> Vec<ComponentRecord> {
        self.milestones
            .iter()
            .find(|(id, _)| id == milestone)
            .map(|(_, components)| components.clone())
            .unwrap_or_default()
    }

    fn milestones(&self) -> Vec<String> {
        self.milestones.iter().map(|(id, _)| id.clone()).collect()
    }
}
