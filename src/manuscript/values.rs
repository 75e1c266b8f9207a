// ABOUTME: Builds the placeholder value mapping for a manuscript
// ABOUTME: Defines the fixed placeholder keys and how each section is rendered to text

use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::fmt;

use super::paper::{Author, Manuscript};
use crate::references::format_reference;
use crate::template::TemplateValues;

/// Placeholders every manuscript supplies a value for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PlaceholderKey {
    Title,
    Subtitle,
    Date,
    Authors,
    Abstract,
    Keywords,
    Intro,
    Methods,
    Results,
    Discussion,
    Conclusion,
    Limitations,
    Ack,
    DataAvail,
    Ethics,
    Funding,
    Conflicts,
    Prisma,
    References,
}

impl PlaceholderKey {
    pub const ALL: [PlaceholderKey; 19] = [
        Self::Title,
        Self::Subtitle,
        Self::Date,
        Self::Authors,
        Self::Abstract,
        Self::Keywords,
        Self::Intro,
        Self::Methods,
        Self::Results,
        Self::Discussion,
        Self::Conclusion,
        Self::Limitations,
        Self::Ack,
        Self::DataAvail,
        Self::Ethics,
        Self::Funding,
        Self::Conflicts,
        Self::Prisma,
        Self::References,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "TITLE",
            Self::Subtitle => "SUBTITLE",
            Self::Date => "DATE",
            Self::Authors => "AUTHORS",
            Self::Abstract => "ABSTRACT",
            Self::Keywords => "KEYWORDS",
            Self::Intro => "INTRO",
            Self::Methods => "METHODS",
            Self::Results => "RESULTS",
            Self::Discussion => "DISCUSSION",
            Self::Conclusion => "CONCLUSION",
            Self::Limitations => "LIMITATIONS",
            Self::Ack => "ACK",
            Self::DataAvail => "DATA_AVAIL",
            Self::Ethics => "ETHICS",
            Self::Funding => "FUNDING",
            Self::Conflicts => "CONFLICTS",
            Self::Prisma => "PRISMA",
            Self::References => "REFERENCES",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

impl fmt::Display for PlaceholderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Manuscript {
    /// Placeholder values, dating an undated manuscript with the local date
    pub fn values(&self) -> TemplateValues {
        self.values_on(Local::now().date_naive())
    }

    /// Placeholder values, using `today` when the manuscript has no date
    pub fn values_on(&self, today: NaiveDate) -> TemplateValues {
        PlaceholderKey::ALL
            .into_iter()
            .map(|key| (key.as_str(), self.value_for(key, today)))
            .collect()
    }

    fn value_for(&self, key: PlaceholderKey, today: NaiveDate) -> String {
        match key {
            PlaceholderKey::Title => self.meta.title.clone(),
            PlaceholderKey::Subtitle => self.meta.subtitle.clone(),
            PlaceholderKey::Date => {
                if self.meta.date.trim().is_empty() {
                    today.format("%Y-%m-%d").to_string()
                } else {
                    self.meta.date.clone()
                }
            }
            PlaceholderKey::Authors => render_authors(&self.meta.authors),
            PlaceholderKey::Abstract => self.summary.text.clone(),
            PlaceholderKey::Keywords => self.summary.keywords.join(", "),
            PlaceholderKey::Intro => self.sections.introduction.clone(),
            PlaceholderKey::Methods => self.sections.methods.clone(),
            PlaceholderKey::Results => self.sections.results.clone(),
            PlaceholderKey::Discussion => self.sections.discussion.clone(),
            PlaceholderKey::Conclusion => self.sections.conclusion.clone(),
            PlaceholderKey::Limitations => self.sections.limitations.clone(),
            PlaceholderKey::Ack => self.acknowledgments.trim().to_string(),
            PlaceholderKey::DataAvail => self.data_availability.clone(),
            PlaceholderKey::Ethics => self.ethics.clone(),
            PlaceholderKey::Funding => self.funding.clone(),
            PlaceholderKey::Conflicts => self.conflicts_of_interest.clone(),
            PlaceholderKey::Prisma => self.sections.prisma.clone(),
            PlaceholderKey::References => self
                .references
                .iter()
                .map(|r| format!("- {}", format_reference(r)))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// One Markdown bullet per author with affiliation, email and ORCID
pub fn render_authors(authors: &[Author]) -> String {
    authors
        .iter()
        .map(|author| {
            let mut extras = Vec::new();
            if !author.affiliation.is_empty() {
                extras.push(author.affiliation.clone());
            }
            if !author.email.is_empty() {
                extras.push(format!("✉ {}", author.email));
            }
            if !author.orcid.is_empty() {
                extras.push(format!("ORCID: {}", author.orcid));
            }

            if extras.is_empty() {
                format!("- **{}**", author.name)
            } else {
                format!("- **{}** — {}", author.name, extras.join(" | "))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
