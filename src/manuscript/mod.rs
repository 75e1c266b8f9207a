// ABOUTME: Manuscript module for structured paper data
// ABOUTME: Loads paper YAML and turns it into the placeholder value mapping

pub mod error;
pub mod paper;
pub mod scalar;
pub mod values;

pub use error::{ManuscriptError, Result};
pub use paper::{Abstract, Author, Manuscript, Meta, Sections};
pub use values::PlaceholderKey;
