// ABOUTME: Value mapping used to fill template placeholders
// ABOUTME: Maps placeholder names to the text substituted in their place

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::engine::is_placeholder_name;
use super::error::{Result, TemplateError};

/// Placeholder name to replacement text. Order is irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateValues {
    variables: HashMap<String, String>,
}

impl TemplateValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or update a value, rejecting names that can never match a placeholder
    pub fn set_variable(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<()> {
        let key = key.into();
        if !is_placeholder_name(&key) {
            return Err(TemplateError::InvalidName(key));
        }
        self.variables.insert(key, value.into());
        Ok(())
    }

    /// Add or update a value without validating the name
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    pub fn get_variable(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.variables.contains_key(key)
    }

    /// Merge another mapping in; its entries win on conflict
    pub fn extend_variables<I, K, V>(&mut self, vars: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.variables
            .extend(vars.into_iter().map(|(k, v)| (k.into(), v.into())));
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.variables.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl From<HashMap<String, String>> for TemplateValues {
    fn from(variables: HashMap<String, String>) -> Self {
        Self { variables }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TemplateValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Self::new();
        values.extend_variables(iter);
        values
    }
}
