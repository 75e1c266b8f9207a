// ABOUTME: APA-style formatting of bibliographic references
// ABOUTME: Produces one Markdown line per reference with author list, year and source

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::reference::{Reference, ReferenceAuthor, ReferenceKind};

/// Join authors as `A`, `A & B` or `A, B, & C`
pub fn format_authors(authors: &[ReferenceAuthor]) -> String {
    let parts: Vec<String> = authors
        .iter()
        .filter_map(|author| {
            let family = author.family.trim();
            let given = author.given.trim();
            match (family.is_empty(), given.is_empty()) {
                (false, false) => Some(format!("{family}, {given}")),
                (false, true) => Some(family.to_string()),
                (true, false) => Some(given.to_string()),
                (true, true) => None,
            }
        })
        .collect();

    match parts.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} & {second}"),
        [init @ .., last] => format!("{}, & {}", init.join(", "), last),
    }
}

/// Year of an ISO date, `n.d.` when absent, or the raw text otherwise
pub fn publication_year(date: &str) -> String {
    let date = date.trim();
    if date.is_empty() {
        return "n.d.".to_string();
    }

    if let Ok(d) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return d.format("%Y").to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
        return dt.format("%Y").to_string();
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(date, fmt) {
            return dt.format("%Y").to_string();
        }
    }

    date.to_string()
}

pub fn format_reference(reference: &Reference) -> String {
    let authors = format_authors(&reference.authors);
    let year = publication_year(&reference.date);
    let title = reference.title.trim_end_matches('.');

    match reference.kind {
        ReferenceKind::JournalArticle => {
            let mut line = format!("{authors} ({year}). {title}. *{}*", reference.container);

            let volume_issue = match (reference.volume.is_empty(), reference.issue.is_empty()) {
                (false, false) => format!("{}({})", reference.volume, reference.issue),
                (false, true) => reference.volume.clone(),
                _ => String::new(),
            };
            if !volume_issue.is_empty() {
                line.push_str(&format!(", {volume_issue}"));
            }
            if !reference.pages.is_empty() {
                line.push_str(&format!(", {}", reference.pages));
            }
            line.push('.');

            let locator = if reference.doi.is_empty() {
                &reference.url
            } else {
                &reference.doi
            };
            if !locator.is_empty() {
                line.push(' ');
                line.push_str(&doi_link(locator));
            }
            line
        }
        ReferenceKind::Book => {
            format!("{authors} ({year}). *{title}*. {}.", reference.publisher)
        }
        ReferenceKind::ConferencePaper => {
            let mut line = format!("{authors} ({year}). {title}. In *{}*", reference.container);
            if reference.pages.is_empty() {
                line.push('.');
            } else {
                line.push_str(&format!(", {}.", reference.pages));
            }
            if !reference.url.is_empty() {
                line.push_str(&format!(" {}", reference.url));
            }
            line
        }
        ReferenceKind::WebArticle => format!(
            "{authors} ({year}). {title}. *{}*. {}",
            reference.container, reference.url
        )
        .trim_end()
        .to_string(),
        ReferenceKind::Other => format!("{authors} ({year}). {title}."),
    }
}

/// Bare DOIs become resolver links; URLs pass through
fn doi_link(locator: &str) -> String {
    if !locator.contains("http") && locator.contains('/') {
        format!("https://doi.org/{locator}")
    } else {
        locator.to_string()
    }
}
