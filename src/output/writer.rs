// ABOUTME: Output writers for stdout and files
// ABOUTME: Handles writing rendered documents to their destinations

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use super::config::OutputDestination;
use super::error::{OutputError, Result};

#[async_trait]
pub trait OutputWriter: Send + Sync {
    async fn write(&self, content: &str, destination: &OutputDestination) -> Result<()>;
}

pub struct StdoutWriter;

pub struct FileWriter;

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl StdoutWriter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OutputWriter for StdoutWriter {
    async fn write(&self, content: &str, _destination: &OutputDestination) -> Result<()> {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(content.as_bytes()).await?;
        stdout.flush().await?;

        debug!("Output written to stdout ({} chars)", content.len());
        Ok(())
    }
}

impl Default for FileWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl FileWriter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OutputWriter for FileWriter {
    async fn write(&self, content: &str, destination: &OutputDestination) -> Result<()> {
        let config = match destination {
            OutputDestination::File(config) => config,
            OutputDestination::Stdout => {
                return Err(OutputError::WriteError {
                    message: "file writer needs a file destination".to_string(),
                })
            }
        };
        let output_path = config.path.as_path();

        if !config.overwrite && fs::try_exists(output_path).await.unwrap_or(false) {
            return Err(OutputError::AlreadyExists {
                path: output_path.display().to_string(),
            });
        }

        // Create parent directories if needed
        if config.create_dirs {
            if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| OutputError::WriteError {
                        message: format!("Failed to create directory {}: {}", parent.display(), e),
                    })?;
            }
        }

        fs::write(output_path, content)
            .await
            .map_err(|e| OutputError::WriteError {
                message: format!("Failed to write file {}: {}", output_path.display(), e),
            })?;

        info!(
            "Output written to file: {} ({} bytes)",
            output_path.display(),
            content.len()
        );
        Ok(())
    }
}
