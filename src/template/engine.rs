// ABOUTME: Placeholder template parsing and rendering
// ABOUTME: Substitutes {{NAME}} markers with mapped values in a single pass

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ops::Range;
use std::sync::LazyLock;
use tracing::debug;

use super::context::TemplateValues;
use super::error::{Result, TemplateError};

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{([A-Za-z_][A-Za-z0-9_]*)\}\}").expect("placeholder pattern is valid")
});

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("name pattern is valid"));

/// Whether `name` can appear inside a `{{...}}` marker
pub fn is_placeholder_name(name: &str) -> bool {
    NAME_RE.is_match(name)
}

/// What to do when a placeholder has no value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderPolicy {
    /// Leave the marker in the output untouched
    #[default]
    Lenient,
    /// Fail, naming every placeholder without a value
    Strict,
}

impl RenderPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            Self::Strict
        } else {
            Self::Lenient
        }
    }
}

/// One marker occurrence in the template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub name: String,
    pub span: Range<usize>,
}

/// A parsed template. Parsing never fails; text that is not a valid
/// marker is literal.
#[derive(Debug, Clone)]
pub struct Template {
    source: String,
    occurrences: Vec<Placeholder>,
}

/// Output of a render call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    /// Placeholders left in place, in first-appearance order
    pub unresolved: Vec<String>,
    /// Mapping keys no placeholder asked for, sorted
    pub unused: Vec<String>,
}

impl Template {
    pub fn parse(source: impl Into<String>) -> Self {
        let source = source.into();
        let occurrences = PLACEHOLDER_RE
            .captures_iter(&source)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let name = caps.get(1)?;
                Some(Placeholder {
                    name: name.as_str().to_string(),
                    span: whole.range(),
                })
            })
            .collect();

        Self {
            source,
            occurrences,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn occurrences(&self) -> &[Placeholder] {
        &self.occurrences
    }

    /// Distinct placeholder names in first-appearance order
    pub fn placeholders(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.occurrences
            .iter()
            .map(|p| p.name.as_str())
            .filter(|name| seen.insert(*name))
            .collect()
    }

    pub fn has_placeholders(&self) -> bool {
        !self.occurrences.is_empty()
    }

    /// Names with no entry in `values`, in first-appearance order
    pub fn missing<'a>(&'a self, values: &TemplateValues) -> Vec<&'a str> {
        self.placeholders()
            .into_iter()
            .filter(|name| !values.contains(name))
            .collect()
    }

    /// Splice mapped values in, leaving markers without a value as they are
    pub fn substitute(&self, values: &TemplateValues) -> String {
        let mut text = String::with_capacity(self.source.len());
        let mut cursor = 0;
        for occurrence in &self.occurrences {
            if let Some(value) = values.get_variable(&occurrence.name) {
                text.push_str(&self.source[cursor..occurrence.span.start]);
                text.push_str(value);
                cursor = occurrence.span.end;
            }
        }
        text.push_str(&self.source[cursor..]);
        text
    }

    /// Substitute every occurrence with its mapped value.
    ///
    /// Inserted values are never re-scanned, so a value containing marker
    /// syntax comes out verbatim.
    pub fn render(&self, values: &TemplateValues, policy: RenderPolicy) -> Result<Rendered> {
        let unresolved: Vec<String> = self
            .missing(values)
            .into_iter()
            .map(str::to_string)
            .collect();

        if policy == RenderPolicy::Strict && !unresolved.is_empty() {
            return Err(TemplateError::MissingValues { names: unresolved });
        }

        let text = self.substitute(values);

        let used: HashSet<&str> = self.occurrences.iter().map(|p| p.name.as_str()).collect();
        let mut unused: Vec<String> = values
            .keys()
            .filter(|k| !used.contains(k))
            .map(str::to_string)
            .collect();
        unused.sort();

        if !unresolved.is_empty() {
            debug!("Left {} placeholder(s) unresolved: {:?}", unresolved.len(), unresolved);
        }
        if !unused.is_empty() {
            debug!("{} value(s) not referenced by template: {:?}", unused.len(), unused);
        }

        Ok(Rendered {
            text,
            unresolved,
            unused,
        })
    }
}

/// Lenient render of `template` with `values`
pub fn render(template: &str, values: &TemplateValues) -> String {
    Template::parse(template).substitute(values)
}
