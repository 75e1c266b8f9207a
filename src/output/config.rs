// ABOUTME: Output destination definitions
// ABOUTME: Distinguishes stdout from file targets and carries file write options

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Where a rendered document goes; `-` means stdout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputDestination {
    Stdout,
    File(FileWriterConfig),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileWriterConfig {
    pub path: PathBuf,
    #[serde(default = "default_true")]
    pub create_dirs: bool,
    #[serde(default = "default_true")]
    pub overwrite: bool,
}

fn default_true() -> bool {
    true
}

impl OutputDestination {
    pub fn parse(target: &str) -> Self {
        if target == "-" {
            Self::Stdout
        } else {
            Self::file(target)
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(FileWriterConfig {
            path: path.into(),
            create_dirs: true,
            overwrite: true,
        })
    }

    /// Same destination, but refusing to replace an existing file
    pub fn no_clobber(self) -> Self {
        match self {
            Self::File(config) => Self::File(FileWriterConfig {
                overwrite: false,
                ..config
            }),
            other => other,
        }
    }
}

impl fmt::Display for OutputDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("stdout"),
            Self::File(config) => write!(f, "{}", config.path.display()),
        }
    }
}
