use crate::ports::outbound::CatalogLookup;
use crate::reporting::domain::{ComponentRecord, MergeRequest, PipelineRun, PipelineStatus};
use chrono::NaiveDate;

/// StaticCatalog adapter - Built-in demo catalog
///
/// A hardcoded milestone/component mapping used when no catalog file is
/// configured. It stands in for a real tracking service behind the same
/// `CatalogLookup` port, so substituting a real backing store never
/// touches the report projector.
pub struct StaticCatalog {
    milestones: Vec<(String, Vec<ComponentRecord>)>,
}

fn component(
    name: &str,
    version: &str,
    pipeline: (&str, PipelineStatus, (i32, u32, u32)),
    merge_request: (&str, u32, &str),
) -> ComponentRecord {
    let (pipeline_id, status, (year, month, day)) = pipeline;
    let (mr_title, mr_number, mr_author) = merge_request;
    let repository_url = format!("https://gitlab.com/org/{}", name);
    ComponentRecord {
        name: name.to_string(),
        version: version.to_string(),
        last_pipeline: PipelineRun {
            id: pipeline_id.to_string(),
            status,
            // Demo data only carries valid calendar dates
            date: NaiveDate::from_ymd_opt(year, month, day).expect("valid demo date"),
        },
        last_merge_request: MergeRequest {
            title: mr_title.to_string(),
            url: format!("{}/-/merge_requests/{}", repository_url, mr_number),
            author: mr_author.to_string(),
        },
        repository_url,
    }
}

impl StaticCatalog {
    pub fn new() -> Self {
        use PipelineStatus::{Failed, Running, Success};

        let milestones = vec![
            (
                "v3.12.0".to_string(),
                vec![
                    component(
                        "auth-service",
                        "2.4.1",
                        ("#84521", Success, (2026, 2, 8)),
                        ("Fix token refresh logic", 142, "jdoe"),
                    ),
                    component(
                        "api-gateway",
                        "1.8.0",
                        ("#84519", Success, (2026, 2, 7)),
                        ("Add rate limiting headers", 97, "asmith"),
                    ),
                    component(
                        "notification-worker",
                        "3.1.2",
                        ("#84515", Failed, (2026, 2, 7)),
                        ("Migrate to new email provider", 63, "mchen"),
                    ),
                    component(
                        "dashboard-ui",
                        "5.0.0",
                        ("#84510", Success, (2026, 2, 6)),
                        ("Redesign settings page", 210, "jdoe"),
                    ),
                ],
            ),
            (
                "v3.11.0".to_string(),
                vec![
                    component(
                        "auth-service",
                        "2.3.0",
                        ("#83200", Success, (2026, 1, 20)),
                        ("Add OAuth2 support", 138, "asmith"),
                    ),
                    component(
                        "billing-service",
                        "1.2.5",
                        ("#83198", Success, (2026, 1, 19)),
                        ("Fix invoice generation", 44, "mchen"),
                    ),
                ],
            ),
            (
                "v3.10.0".to_string(),
                vec![component(
                    "dashboard-ui",
                    "4.9.0",
                    ("#82100", Success, (2026, 1, 5)),
                    ("Add dark mode toggle", 195, "jdoe"),
                )],
            ),
            (
                "v3.9.0".to_string(),
                vec![
                    component(
                        "api-gateway",
                        "1.7.0",
                        ("#81000", Success, (2025, 12, 18)),
                        ("Upgrade dependencies", 88, "asmith"),
                    ),
                    component(
                        "notification-worker",
                        "3.0.0",
                        ("#80998", Running, (2025, 12, 17)),
                        ("Add SMS channel", 55, "mchen"),
                    ),
                ],
            ),
        ];

        Self { milestones }
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogLookup for StaticCatalog {
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
