// ABOUTME: Main library module for paperfill
// ABOUTME: Exports the template renderer, manuscript model, and CLI

pub mod cli;
pub mod manuscript;
pub mod output;
pub mod references;
pub mod template;

// Re-export commonly used types
pub use cli::{App, Args, Config};
pub use manuscript::{Manuscript, PlaceholderKey};
pub use references::{format_reference, Reference};
pub use template::{render, RenderPolicy, Rendered, Template, TemplateError, TemplateValues};

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
