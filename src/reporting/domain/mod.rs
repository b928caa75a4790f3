pub mod component;
pub mod payload;

pub use component::{ComponentRecord, MergeRequest, PipelineRun, PipelineStatus};
pub use payload::ReportPayload;
