//! NCBI E-utilities integration for PubMed.
//!
//! Wraps the two endpoints this tool needs: `esearch.fcgi` to resolve a
//! query into PMIDs and `efetch.fcgi` to pull the full article XML.

mod client;
pub mod response;

pub use client::{Contact, EutilsClient};

/// Errors that can occur when talking to E-utilities
#[derive(Debug, thiserror::Error)]
pub enum EutilsError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("API error: {0}")]
    Api(String),
}

impl From<reqwest::Error> for EutilsError {
    fn from(err: reqwest::Error) -> Self {
        EutilsError::Network(err.to_string())
    }
}

impl From<quick_xml::DeError> for EutilsError {
    fn from(err: quick_xml::DeError) -> Self {
        EutilsError::Parse(format!("XML: {}", err))
    }
}
