// ABOUTME: Main application orchestration for paperfill CLI
// ABOUTME: Coordinates between CLI arguments, configuration, and command execution

use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use super::commands;
use super::{Args, Commands, Config};

pub struct App {
    config: Config,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Initialize logging based on configuration
    pub fn init_logging(&self, verbose: bool, no_color: bool) -> Result<()> {
        let log_level = if verbose {
            "debug"
        } else {
            &self.config.logging.level
        };

        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

        let ansi = ansi_enabled(no_color, |key| std::env::var(key).ok());

        // Logs go to stderr so rendered documents can be piped from stdout
        let result = match self.config.logging.format.as_str() {
            "compact" => tracing_subscriber::fmt()
                .compact()
                .with_env_filter(env_filter)
                .with_ansi(ansi)
                .with_target(false)
                .with_writer(std::io::stderr)
                .try_init(),
            _ => tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_ansi(ansi)
                .with_target(false)
                .with_writer(std::io::stderr)
                .try_init(),
        };
        result.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

        debug!("Logging initialized with level: {}", log_level);
        Ok(())
    }

    /// Run the application with parsed arguments
    pub async fn run(&mut self, args: Args) -> Result<()> {
        self.init_logging(args.verbose, args.no_color)?;

        info!("Starting paperfill v{}", env!("CARGO_PKG_VERSION"));
        debug!("Configuration loaded from: {:?}", args.config);

        self.apply_command_variables(&args.command)?;

        match args.command {
            Commands::Render {
                data,
                template,
                output,
                strict,
                ..
            } => {
                let strict = strict || self.config.strict;
                commands::render_manuscript(data, template, output, strict, &self.config).await
            }

            Commands::Fill {
                template,
                output,
                strict,
                ..
            } => {
                let strict = strict || self.config.strict;
                commands::fill_template(template, output, strict, &self.config).await
            }

            Commands::Check {
                template,
                data,
                format,
                strict,
                ..
            } => {
                let strict = strict || self.config.strict;
                commands::check_template(template, data, format, strict, &self.config).await
            }

            Commands::Init { output_dir, force } => {
                commands::init_project(output_dir, force, &self.config).await
            }
        }
    }

    /// Merge command-line variables over the configured ones
    fn apply_command_variables(&mut self, command: &Commands) -> Result<()> {
        match command {
            Commands::Render { vars, .. }
            | Commands::Fill { vars, .. }
            | Commands::Check { vars, .. } => {
                let variables = Args::parse_variables(vars)?;
                debug!("Parsed {} command-line variables", variables.len());
                self.config.merge_variables(&variables);
            }
            Commands::Init { .. } => {}
        }
        Ok(())
    }

    /// Create application from command line arguments
    pub fn from_args(args: &Args) -> Result<Self> {
        let config = Config::load(args.config.clone())?;
        Ok(Self::new(config))
    }
}

/// Colored log output unless `--no-color` is given or `NO_COLOR` is set non-empty
fn ansi_enabled<F>(no_color: bool, lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    !no_color && lookup("NO_COLOR").map_or(true, |value| value.is_empty())
}
