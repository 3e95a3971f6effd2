//! The structured extraction result shared by the extractor and summarizer.

use indexmap::IndexMap;
use serde::Serialize;

/// Title used when no title can be located in a document.
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Section label → section body, in insertion order.
///
/// Inserting an existing label replaces its body in place (last write wins,
/// original position kept). Labels come from a heading heuristic, so
/// uniqueness is not guaranteed by the source document.
pub type Sections = IndexMap<String, String>;

/// Structured content of one paper.
///
/// Built once per request and never mutated afterwards; the summarizer
/// reads it and the caller drops it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaperRecord {
    /// Best-effort title; [`UNKNOWN_TITLE`] when none was found.
    pub title: String,
    /// Abstract text, empty when no abstract region was detected.
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// Heuristically detected sections. Always empty for HTML sources.
    pub sections: Sections,
    /// Entire extracted document text.
    pub full_text: String,
    /// The URL actually fetched, after any rewriting.
    pub source_url: String,
}

impl PaperRecord {
    /// Returns the body of the first label in `labels` present in
    /// [`sections`](Self::sections), or an empty string.
    #[must_use]
    pub fn first_section<'a>(&'a self, labels: &[&str]) -> &'a str {
        labels
            .iter()
            .find_map(|label| self.sections.get(*label))
            .map_or("", String::as_str)
    }
}
