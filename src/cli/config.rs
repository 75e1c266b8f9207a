// ABOUTME: Configuration management for paperfill
// ABOUTME: Handles loading and merging configuration from files and environment variables

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::template::TemplateValues;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_template_path")]
    pub template_path: PathBuf,

    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,

    #[serde(default = "default_output_path")]
    pub output_path: String,

    #[serde(default)]
    pub strict: bool,

    #[serde(default)]
    pub template_vars: HashMap<String, String>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

fn default_template_path() -> PathBuf {
    PathBuf::from("TEMPLATE.md")
}

fn default_data_path() -> PathBuf {
    PathBuf::from("paper.yaml")
}

fn default_output_path() -> String {
    "paper.md".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template_path: default_template_path(),
            data_path: default_data_path(),
            output_path: default_output_path(),
            strict: false,
            template_vars: HashMap::new(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file path or default locations
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => {
                if !p.exists() {
                    return Err(anyhow::anyhow!(
                        "Configuration file not found: {}",
                        p.display()
                    ));
                }
                Some(p)
            }
            None => Self::find_config_file(),
        };

        let mut config = match config_path {
            Some(config_path) => Self::from_file(&config_path)?,
            None => Config::default(),
        };

        config.merge_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Parse a configuration file without applying environment overrides
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read configuration '{}': {}", path.display(), e)
        })?;
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse configuration '{}': {}", path.display(), e)
        })
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let possible_paths = [
            PathBuf::from("paperfill.yaml"),
            PathBuf::from("paperfill.yml"),
            PathBuf::from(".paperfill.yaml"),
            PathBuf::from(".paperfill.yml"),
        ];

        // Check current directory
        if let Some(path) = possible_paths.into_iter().find(|p| p.exists()) {
            return Some(path);
        }

        // Check home directory
        dirs::home_dir()
            .map(|home| home.join(".paperfill").join("config.yaml"))
            .filter(|p| p.exists())
    }

    /// Merge environment variables into configuration
    pub fn merge_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("PAPERFILL_TEMPLATE") {
            self.template_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("PAPERFILL_DATA") {
            self.data_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("PAPERFILL_OUTPUT") {
            self.output_path = path;
        }
        if let Some(strict) = lookup("PAPERFILL_STRICT") {
            self.strict = parse_bool(&strict).ok_or_else(|| {
                anyhow::anyhow!("Invalid PAPERFILL_STRICT value '{}'", strict)
            })?;
        }

        // Logging configuration
        if let Some(level) = lookup("PAPERFILL_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("PAPERFILL_LOG_FORMAT") {
            self.logging.format = format;
        }

        Ok(())
    }

    /// Merge additional variables into template variables
    pub fn merge_variables(&mut self, vars: &TemplateValues) {
        self.template_vars
            .extend(vars.iter().map(|(k, v)| (k.to_string(), v.to_string())));
    }

    /// Configured template variables as a value mapping
    pub fn template_values(&self) -> TemplateValues {
        self.template_vars
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
