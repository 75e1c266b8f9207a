// ABOUTME: Data model for a single bibliographic reference
// ABOUTME: Covers journal articles, books, conference papers and web articles

use serde::{Deserialize, Serialize};

use crate::manuscript::scalar::{deserialize_scalar, null_as_default};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    #[default]
    JournalArticle,
    Book,
    ConferencePaper,
    WebArticle,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Reference {
    #[serde(default, rename = "type", deserialize_with = "null_as_default")]
    pub kind: ReferenceKind,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub title: String,
    /// Journal, proceedings or website name
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub container: String,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub authors: Vec<ReferenceAuthor>,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub volume: String,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub issue: String,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub pages: String,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub doi: String,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub url: String,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub publisher: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceAuthor {
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub family: String,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub given: String,
}

impl ReferenceAuthor {
    pub fn new(family: impl Into<String>, given: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            given: given.into(),
        }
    }
}
