//! Query model: document categories and the publication date range.

use std::fmt;

/// The two document corpora harvested from PubMed, distinguished by
/// publication type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Letters, reviews and conference abstracts
    Background,
    /// Journal articles and clinical trials
    Reference,
}

impl Category {
    /// All categories, in the order they are harvested
    pub const ALL: [Category; 2] = [Category::Background, Category::Reference];

    /// Short lowercase name used in log and status output
    pub fn name(&self) -> &'static str {
        match self {
            Category::Background => "background",
            Category::Reference => "reference",
        }
    }

    /// PubMed publication types (`[pt]` filter values) that define this category
    pub fn publication_types(&self) -> &'static [&'static str] {
        match self {
            Category::Background => &["Letter", "Review", "Conference Abstract"],
            Category::Reference => &["Journal Article", "Clinical Trial"],
        }
    }

    /// File name of this category's output, relative to the output directory
    pub fn output_filename(&self) -> &'static str {
        match self {
            Category::Background => "pubmed_background.json",
            Category::Reference => "pubmed_reference.json",
        }
    }

    /// Full PubMed search term restricting to `range` and this category's
    /// publication types
    pub fn search_term(&self, range: &DateRange) -> String {
        let types = self
            .publication_types()
            .iter()
            .map(|pt| format!("{}[pt]", pt))
            .collect::<Vec<_>>()
            .join(" OR ");

        format!(
            "({}[Date - Publication] : {}[Date - Publication]) AND ({})",
            range.start, range.end, types
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Inclusive publication date range, as accepted by PubMed's
/// `[Date - Publication]` field (e.g. `2023/01/01` or `2023`).
///
/// The bounds are passed through to the query verbatim; PubMed itself
/// rejects malformed dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

impl DateRange {
    /// Create a date range from its bounds
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}
