// ABOUTME: Bibliographic references and their APA-style rendering
// ABOUTME: Exports the reference data model and the formatter

pub mod apa;
pub mod reference;

pub use apa::{format_authors, format_reference, publication_year};
pub use reference::{Reference, ReferenceAuthor, ReferenceKind};
