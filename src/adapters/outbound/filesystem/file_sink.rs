use crate::ports::outbound::DeliverySink;
use crate::shared::error::ReportError;
use crate::shared::{security, Result};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// FileSystemSink adapter for saving reports into a directory
///
/// Implements the DeliverySink port: named payloads are written as files
/// under the output directory; markup documents are streamed to stdout
/// for the host's display/print pipeline (documents carry no filename).
pub struct FileSystemSink {
    output_dir: PathBuf,
}

impl FileSystemSink {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    fn validate_output_dir(&self) -> Result<()> {
        if !self.output_dir.exists() {
            return Err(ReportError::InvalidOutputDir {
                path: self.output_dir.clone(),
                reason: "Directory does not exist".to_string(),
            }
            .into());
        }
        if !self.output_dir.is_dir() {
            return Err(ReportError::InvalidOutputDir {
                path: self.output_dir.clone(),
                reason: "Not a directory".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl DeliverySink for FileSystemSink {
    fn save(&self, filename: &str, content: &str, _mime_type: &str) -> Result<()> {
        self.validate_output_dir()?;

        let output_path = self.output_dir.join(filename);
        // Refuse to follow an existing symlink at the target path
        if output_path.exists() {
            security::validate_not_symlink(&output_path, "write")?;
        }

        fs::write(&output_path, content).map_err(|e| ReportError::FileWriteError {
            path: output_path.clone(),
            details: e.to_string(),
        })?;

        eprintln!("✅ Saved: {}", output_path.display());
        Ok(())
    }

    fn present(&self, markup: &str) -> Result<()> {
        io::stdout()
            .write_all(markup.as_bytes())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}

/// StdoutSink adapter for writing reports to stdout
///
/// Used when no output directory is configured; the filename is dropped
/// and the content is streamed as-is so it can be piped.
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DeliverySink for StdoutSink {
    fn save(&self, _filename: &str, content: &str, _mime_type: &str) -> Result<()> {
        io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }

    fn present(&self, markup: &str) -> Result<()> {
        io::stdout()
            .write_all(markup.as_bytes())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
