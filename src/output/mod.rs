// ABOUTME: Output module for rendered documents
// ABOUTME: Routes text to stdout or files through pluggable writers

pub mod config;
pub mod error;
pub mod writer;

pub use config::{FileWriterConfig, OutputDestination};
pub use error::{OutputError, Result};
pub use writer::{FileWriter, OutputWriter, StdoutWriter};

/// Write `content` with the writer matching `destination`
pub async fn write_output(content: &str, destination: &OutputDestination) -> Result<()> {
    match destination {
        OutputDestination::Stdout => StdoutWriter::new().write(content, destination).await,
        OutputDestination::File(_) => FileWriter::new().write(content, destination).await,
    }
}
