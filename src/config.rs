//! Configuration file support for deploy-report.
//!
//! Provides YAML-based configuration through `deploy-report.config.yml`
//! files, including data structures, file loading, and validation.
//! Command-line flags always take precedence over config values.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::application::dto::OutputFormat;
use crate::shared::Result;

const CONFIG_FILENAME: &str = "deploy-report.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub exclude_components: Option<Vec<String>>,
    pub catalog: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yml::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yml::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if let Err(message) = OutputFormat::from_str(format) {
            bail!(
                "Invalid config: {}\n\n💡 Hint: Set 'format' to one of \"text\", \"markdown\" or \"html\".",
                message
            );
        }
    }

    if let Some(ref excluded) = config.exclude_components {
        for (i, name) in excluded.iter().enumerate() {
            if name.trim().is_empty() {
                bail!(
                    "Invalid config: exclude_components[{}] must not be empty.\n\n\
                     💡 Hint: Each exclude_components entry must be a component name (e.g., \"notification-worker\").",
                    i
                );
            }
        }
    }

    Ok(())
}

/// Print warnings for unknown config fields to stderr.
fn warn_unknown_fields(config: &ConfigFile) {
    for field in config.unknown_fields.keys() {
        eprintln!("⚠️  Warning: unknown config field '{}' ignored", field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_full_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "format: markdown\nexclude_components:\n  - notification-worker\ncatalog: catalog.yml\noutput_dir: reports\n",
        );

        let config = load_config_from_path(&path).unwrap();
        assert_eq!(config.format.as_deref(), Some("markdown"));
        assert_eq!(
            config.exclude_components,
            Some(vec!["notification-worker".to_string()])
        );
        assert_eq!(config.catalog, Some(PathBuf::from("catalog.yml")));
        assert_eq!(config.output_dir, Some(PathBuf::from("reports")));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = load_config_from_path(Path::new("/no/such/deploy-report.config.yml"));
        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("Failed to read config file"));
    }

    #[test]
    fn test_load_invalid_yaml_fails() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "format: [not: {closed");
        let result = load_config_from_path(&path);
        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("Failed to parse config file"));
    }

    #[test]
    fn test_validate_rejects_unknown_format() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "format: pdf\n");
        let result = load_config_from_path(&path);
        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("Invalid config"));
    }

    #[test]
    fn test_validate_rejects_blank_exclusion() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "exclude_components:\n  - \"  \"\n");
        let result = load_config_from_path(&path);
        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("exclude_components[0]"));
    }

    #[test]
    fn test_unknown_fields_are_captured() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "format: text\ntypo_field: true\n");
        let config = load_config_from_path(&path).unwrap();
        assert!(config.unknown_fields.contains_key("typo_field"));
    }

    #[test]
    fn test_discover_config_present() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "format: html\n");
        let config = discover_config(dir.path()).unwrap();
        assert_eq!(config.unwrap().format.as_deref(), Some("html"));
    }

    #[test]
    fn test_discover_config_absent_is_silent() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }
}
