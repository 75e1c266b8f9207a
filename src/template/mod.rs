// ABOUTME: Template module for paperfill
// ABOUTME: Provides placeholder parsing, value mappings, and single-pass rendering

pub mod context;
pub mod engine;
pub mod error;

pub use context::TemplateValues;
pub use engine::{is_placeholder_name, render, Placeholder, RenderPolicy, Rendered, Template};
pub use error::{Result, TemplateError};
