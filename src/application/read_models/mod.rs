//! Read models for report rendering
//!
//! This module contains view-optimized structs that give the formatters
//! a flattened representation of the report, decoupled from the domain
//! records.

mod report_view;
mod report_view_builder;

pub use report_view::{ComponentRow, ReportView};
pub use report_view_builder::ReportViewBuilder;
