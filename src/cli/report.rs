// ABOUTME: Placeholder coverage report for `paperfill check`
// ABOUTME: Summarises which template placeholders have values and which do not

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt::Write as _;

use crate::manuscript::PlaceholderKey;
use crate::template::{Template, TemplateValues};

#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub template: String,
    pub placeholders: IndexMap<String, PlaceholderStatus>,
    pub unresolved: Vec<String>,
    pub unused: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderStatus {
    pub occurrences: usize,
    pub resolved: bool,
    /// One of the standard manuscript keys
    pub standard: bool,
}

impl CheckReport {
    pub fn build(template_name: &str, template: &Template, values: &TemplateValues) -> Self {
        let mut placeholders: IndexMap<String, PlaceholderStatus> = IndexMap::new();
        for occurrence in template.occurrences() {
            placeholders
                .entry(occurrence.name.clone())
                .and_modify(|status| status.occurrences += 1)
                .or_insert_with(|| PlaceholderStatus {
                    occurrences: 1,
                    resolved: values.contains(&occurrence.name),
                    standard: PlaceholderKey::from_name(&occurrence.name).is_some(),
                });
        }

        let unresolved = placeholders
            .iter()
            .filter(|(_, status)| !status.resolved)
            .map(|(name, _)| name.clone())
            .collect();

        let mut unused: Vec<String> = values
            .keys()
            .filter(|key| !placeholders.contains_key(*key))
            .map(str::to_string)
            .collect();
        unused.sort();

        Self {
            template: template_name.to_string(),
            placeholders,
            unresolved,
            unused,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Template: {}", self.template);
        let _ = writeln!(out, "  Placeholders: {}", self.placeholders.len());
        for (name, status) in &self.placeholders {
            let mark = if status.resolved { "✓" } else { "✗" };
            let mut line = format!("  {} {}", mark, name);
            if status.occurrences > 1 {
                let _ = write!(line, " (x{})", status.occurrences);
            }
            if !status.standard {
                line.push_str(" [custom]");
            }
            let _ = writeln!(out, "{}", line);
        }
        if !self.unresolved.is_empty() {
            let _ = writeln!(out, "  Unresolved: {}", self.unresolved.join(", "));
        }
        if !self.unused.is_empty() {
            let _ = writeln!(out, "  Unused values: {}", self.unused.join(", "));
        }
        out
    }
}
