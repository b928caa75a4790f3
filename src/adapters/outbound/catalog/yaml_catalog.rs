use crate::ports::outbound::CatalogLookup;
use crate::reporting::domain::ComponentRecord;
use crate::shared::error::ReportError;
use crate::shared::{security, Result};
use serde::Deserialize;
use std::path::Path;

/// One milestone entry in a catalog file
#[derive(Debug, Deserialize)]
struct MilestoneEntry {
    id: String,
    #[serde(default)]
    components: Vec<ComponentRecord>,
}

/// Catalog file schema: an ordered list of milestones
#[derive(Debug, Deserialize)]
struct CatalogFile {
    milestones: Vec<MilestoneEntry>,
}

/// YamlCatalog adapter - Catalog backed by a YAML file
///
/// Loads the whole milestone/component mapping once at construction;
/// afterwards lookups are total, pure, in-memory queries like any other
/// `CatalogLookup`. Milestone order in the file is the display order.
#[derive(Debug)]
pub struct YamlCatalog {
    milestones: Vec<(String, Vec<ComponentRecord>)>,
}

impl YamlCatalog {
    /// Reads and parses a catalog file
    ///
    /// # Errors
    /// Returns an error if the file is missing, is a symlink or not a
    /// regular file, or does not parse as a catalog document
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ReportError::CatalogNotFound {
                path: path.to_path_buf(),
                suggestion: "Pass --catalog with an existing YAML catalog file, or omit it to use the built-in demo catalog".to_string(),
            }
            .into());
        }
        security::validate_regular_file(path, "catalog file")?;

        let content = std::fs::read_to_string(path).map_err(|e| ReportError::CatalogParseError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        Self::from_str_for_path(&content, path)
    }

    fn from_str_for_path(content: &str, path: &Path) -> Result<Self> {
        let file: CatalogFile =
            serde_yml::from_str(content).map_err(|e| ReportError::CatalogParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        let milestones = file
            .milestones
            .into_iter()
            .map(|entry| (entry.id, entry.components))
            .collect();
        Ok(Self { milestones })
    }
}

impl CatalogLookup for YamlCatalog {
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
