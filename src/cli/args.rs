// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the main CLI structure and subcommands for paperfill

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::template::TemplateValues;

#[derive(Parser)]
#[command(name = "paperfill")]
#[command(about = "Fill IMRaD/PRISMA manuscript templates from structured YAML")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a manuscript from its YAML data and a Markdown template
    Render {
        #[arg(short, long, help = "Manuscript YAML file [default: paper.yaml]")]
        data: Option<PathBuf>,

        #[arg(short, long, help = "Template file [default: TEMPLATE.md]")]
        template: Option<PathBuf>,

        #[arg(short, long, help = "Output file, or - for stdout [default: paper.md]")]
        output: Option<String>,

        #[arg(
            short = 'V',
            long = "var",
            help = "Override placeholder values (KEY=VALUE)"
        )]
        vars: Vec<String>,

        #[arg(long, help = "Fail if any placeholder has no value")]
        strict: bool,
    },

    /// Fill any template with values given on the command line
    Fill {
        #[arg(help = "Path to the template file")]
        template: PathBuf,

        #[arg(short = 'V', long = "var", help = "Placeholder values (KEY=VALUE)")]
        vars: Vec<String>,

        #[arg(short, long, help = "Output file, or - for stdout", default_value = "-")]
        output: String,

        #[arg(long, help = "Fail if any placeholder has no value")]
        strict: bool,
    },

    /// List a template's placeholders and whether each has a value
    Check {
        #[arg(short, long, help = "Template file [default: TEMPLATE.md]")]
        template: Option<PathBuf>,

        #[arg(short, long, help = "Manuscript YAML file [default: paper.yaml if present]")]
        data: Option<PathBuf>,

        #[arg(short = 'V', long = "var", help = "Extra placeholder values (KEY=VALUE)")]
        vars: Vec<String>,

        #[arg(long, value_enum, default_value_t = CheckFormat::Text, help = "Report format")]
        format: CheckFormat,

        #[arg(long, help = "Fail if any placeholder has no value")]
        strict: bool,
    },

    /// Write a starter TEMPLATE.md and paper.yaml
    Init {
        #[arg(short, long, help = "Output directory", default_value = ".")]
        output_dir: PathBuf,

        #[arg(long, help = "Overwrite existing files")]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CheckFormat {
    Text,
    Json,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse variables from KEY=VALUE format
    pub fn parse_variables(vars: &[String]) -> anyhow::Result<TemplateValues> {
        let mut variables = TemplateValues::new();

        for var in vars {
            if let Some((key, value)) = var.split_once('=') {
                variables
                    .set_variable(key, value)
                    .map_err(|e| anyhow::anyhow!("Invalid variable '{}': {}", var, e))?;
            } else {
                return Err(anyhow::anyhow!(
                    "Invalid variable format '{}'. Expected 'KEY=VALUE'",
                    var
                ));
            }
        }

        Ok(variables)
    }
}
