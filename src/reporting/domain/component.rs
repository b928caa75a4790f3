use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Outcome of a pipeline execution.
///
/// This is a closed set: catalog data with any other status value is
/// rejected at deserialization time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineStatus {
    Success,
    Failed,
    Running,
}

impl PipelineStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStatus::Success => "success",
            PipelineStatus::Failed => "failed",
            PipelineStatus::Running => "running",
        }
    }
}

impl std::fmt::Display for PipelineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The most recent build/test execution of a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineRun {
    /// Pipeline identifier (e.g., "#84521")
    pub id: String,
    pub status: PipelineStatus,
    /// Calendar date of the execution
    pub date: NaiveDate,
}

/// The most recent integrated change of a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeRequest {
    pub title: String,
    pub url: String,
    pub author: String,
}

/// One software component's release state as of the last known activity.
///
/// `name` is unique within the component sequence returned for a given
/// milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub name: String,
    /// Free-form version string
    pub version: String,
    /// Canonical link to the component's source repository
    pub repository_url: String,
    pub last_pipeline: PipelineRun,
    pub last_merge_request: MergeRequest,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ComponentRecord {
        ComponentRecord {
            name: "auth-service".to_string(),
            version: "2.4.1".to_string(),
            repository_url: "https://gitlab.com/org/auth-service".to_string(),
            last_pipeline: PipelineRun {
                id: "#84521".to_string(),
                status: PipelineStatus::Success,
                date: NaiveDate::from_ymd_opt(2026, 2, 8).unwrap(),
            },
            last_merge_request: MergeRequest {
                title: "Fix token refresh logic".to_string(),
                url: "https://gitlab.com/org/auth-service/-/merge_requests/142".to_string(),
                author: "jdoe".to_string(),
            },
        }
    }

    #[test]
    fn test_pipeline_status_as_str() {
        assert_eq!(PipelineStatus::Success.as_str(), "success");
        assert_eq!(PipelineStatus::Failed.as_str(), "failed");
        assert_eq!(PipelineStatus::Running.as_str(), "running");
    }

    #[test]
    fn test_pipeline_status_display() {
        assert_eq!(PipelineStatus::Running.to_string(), "running");
    }

    #[test]
    fn test_pipeline_status_deserializes_lowercase() {
        let status: PipelineStatus = serde_yml::from_str("failed").unwrap();
        assert_eq!(status, PipelineStatus::Failed);
    }

    #[test]
    fn test_pipeline_status_rejects_unknown_value() {
        let result: std::result::Result<PipelineStatus, _> = serde_yml::from_str("cancelled");
        assert!(result.is_err());
    }

    #[test]
    fn test_component_record_yaml_round_trip() {
        let record = sample_record();
        let yaml = serde_yml::to_string(&record).unwrap();
        let parsed: ComponentRecord = serde_yml::from_str(&yaml).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_pipeline_date_parses_calendar_date() {
        let yaml = "id: '#84521'\nstatus: success\ndate: 2026-02-08\n";
        let run: PipelineRun = serde_yml::from_str(yaml).unwrap();
        assert_eq!(run.date, NaiveDate::from_ymd_opt(2026, 2, 8).unwrap());
    }
}
