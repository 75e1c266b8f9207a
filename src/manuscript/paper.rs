// ABOUTME: Structured manuscript data model and YAML loading
// ABOUTME: Mirrors the IMRaD + PRISMA sections of a systematic-review paper

use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tracing::debug;

use super::error::{ManuscriptError, Result};
use super::scalar::{deserialize_scalar, deserialize_scalar_list, null_as_default};
use crate::references::Reference;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manuscript {
    #[serde(default, deserialize_with = "null_as_default")]
    pub meta: Meta,
    #[serde(default, rename = "abstract", deserialize_with = "null_as_default")]
    pub summary: Abstract,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sections: Sections,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub acknowledgments: String,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub data_availability: String,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub ethics: String,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub funding: String,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub conflicts_of_interest: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub references: Vec<Reference>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub subtitle: String,
    /// Publication date as written; empty means "today" when rendering
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub authors: Vec<Author>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Author {
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub affiliation: String,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub orcid: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Abstract {
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub text: String,
    #[serde(default, deserialize_with = "deserialize_scalar_list")]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sections {
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub introduction: String,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub methods: String,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub prisma: String,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub results: String,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub discussion: String,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub conclusion: String,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub limitations: String,
}

impl Manuscript {
    /// Load a manuscript from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .map_err(|source| ManuscriptError::IoError {
                path: path.to_path_buf(),
                source,
            })?;
        debug!("Read {} bytes of manuscript YAML from {}", content.len(), path.display());
        Self::from_yaml_str(&content)
    }

    /// Parse a manuscript from YAML text.
    ///
    /// Text wrapped in a Markdown code fence is unwrapped first. An empty
    /// document yields an empty manuscript.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let content = strip_code_fence(content);
        let value: serde_yaml::Value = serde_yaml::from_str(content)?;

        match value {
            serde_yaml::Value::Null => Ok(Self::default()),
            serde_yaml::Value::Mapping(_) => Ok(serde_yaml::from_value(value)?),
            _ => Err(ManuscriptError::InvalidFormat(
                "top level must be a mapping of sections".to_string(),
            )),
        }
    }
}

/// Remove a surrounding ```yaml fence, if any
pub fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    if !trimmed.starts_with("```") {
        return trimmed;
    }

    let body = match trimmed.find('\n') {
        Some(idx) => &trimmed[idx + 1..],
        None => return "",
    };

    let mut end = body.len();
    let mut offset = 0;
    for line in body.split_inclusive('\n') {
        if line.trim_start().starts_with("```") {
            end = offset;
            break;
        }
        offset += line.len();
    }

    body[..end].trim()
}
