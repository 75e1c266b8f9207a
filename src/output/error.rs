// ABOUTME: Error types for output handling operations
// ABOUTME: Defines the failures that can occur while writing rendered documents

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Write error: {message}")]
    WriteError { message: String },

    #[error("Refusing to overwrite existing file: {path}")]
    AlreadyExists { path: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OutputError>;
