// ABOUTME: Error types for template engine operations
// ABOUTME: Defines the failures that placeholder rendering can report

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Missing values for placeholders: {}", names.join(", "))]
    MissingValues { names: Vec<String> },

    #[error("Invalid placeholder name '{0}'")]
    InvalidName(String),
}

pub type Result<T> = std::result::Result<T, TemplateError>;
