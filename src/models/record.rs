//! Output record model for harvested abstracts.

use serde::{Deserialize, Serialize};

/// Structured publication date, kept as the source's strings.
///
/// PubMed reports `ArticleDate` components as text (e.g. month `"06"`);
/// they are carried through without reformatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PubDate {
    pub year: String,
    pub month: String,
    pub day: String,
}

impl PubDate {
    /// Create a publication date from its components
    pub fn new(year: impl Into<String>, month: impl Into<String>, day: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            month: month.into(),
            day: day.into(),
        }
    }
}

/// The minimal representation of one PubMed document retained for output.
///
/// Serialized field names are the output-file contract: `article_title`,
/// `article_abstract`, `pub_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbstractRecord {
    /// Article title as returned by the source
    pub article_title: String,

    /// First abstract segment only
    pub article_abstract: String,

    /// Year/month/day from the first article-date entry
    pub pub_date: PubDate,
}

impl AbstractRecord {
    /// Create a new abstract record
    pub fn new(
        article_title: impl Into<String>,
        article_abstract: impl Into<String>,
        pub_date: PubDate,
    ) -> Self {
        Self {
            article_title: article_title.into(),
            article_abstract: article_abstract.into(),
            pub_date,
        }
    }
}
