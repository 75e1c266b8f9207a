// ABOUTME: CLI module for paperfill
// ABOUTME: Exports command line interface components and main application logic

pub mod app;
pub mod args;
pub mod commands;
pub mod config;
pub mod report;
pub mod scaffold;

pub use app::App;
pub use args::{Args, CheckFormat, Commands};
pub use config::Config;
