// ABOUTME: Error types for manuscript loading
// ABOUTME: Covers reading and decoding the structured paper YAML

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManuscriptError {
    #[error("Failed to read manuscript file '{}': {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manuscript YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid manuscript format: {0}")]
    InvalidFormat(String),
}

pub type Result<T> = std::result::Result<T, ManuscriptError>;
