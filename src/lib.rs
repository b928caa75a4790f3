//! deploy-report - Deployment report generator for release milestones
//!
//! This library turns a milestone's component catalog (version, last
//! pipeline run, last merge request per component) into a shareable
//! report in plain text, Markdown, or printable HTML, following
//! hexagonal architecture principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`reporting`): Component records, selection state,
//!   milestone sessions
//! - **Application Layer** (`application`): Use cases, read models and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```
//! use deploy_report::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let catalog = StaticCatalog::new();
//! let notifier = StderrNotifier::new();
//!
//! // Create use case
//! let use_case = GenerateReportUseCase::new(catalog, notifier);
//!
//! // Execute
//! let request = ReportRequest::new("v3.12.0".to_string(), vec![], OutputFormat::Markdown);
//! let response = use_case.execute(request)?;
//!
//! assert_eq!(response.component_count, 4);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod reporting;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::catalog::{StaticCatalog, YamlCatalog};
    pub use crate::adapters::outbound::console::StderrNotifier;
    pub use crate::adapters::outbound::filesystem::{FileSystemSink, StdoutSink};
    pub use crate::adapters::outbound::formatters::{
        HtmlFormatter, MarkdownFormatter, TextFormatter,
    };
    pub use crate::application::dto::{OutputFormat, ReportRequest, ReportResponse};
    pub use crate::application::factories::{FormatterFactory, SinkFactory, SinkType};
    pub use crate::application::read_models::{ComponentRow, ReportView, ReportViewBuilder};
    pub use crate::application::use_cases::GenerateReportUseCase;
    pub use crate::ports::outbound::{CatalogLookup, DeliverySink, Notifier, ReportFormatter};
    pub use crate::reporting::domain::{
        ComponentRecord, MergeRequest, PipelineRun, PipelineStatus, ReportPayload,
    };
    pub use crate::reporting::services::{MilestoneSession, SelectionState};
    pub use crate::shared::error::{ExitCode, ReportError};
    pub use crate::shared::Result;
}
