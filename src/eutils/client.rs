//! HTTP client for the ESearch and EFetch endpoints.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::eutils::response::{self, PubmedArticleSet};
use crate::eutils::EutilsError;

/// PubMed E-utilities API base URLs
const PUBMED_ESEARCH_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi";
const PUBMED_EFETCH_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/efetch.fcgi";

/// Contact details sent with every request, per NCBI usage policy.
///
/// The email lets NCBI reach out before blocking a misbehaving client;
/// the API key raises the per-second request allowance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    /// Contact email address (optional)
    #[serde(default)]
    pub email: Option<String>,

    /// NCBI API key (optional, for higher rate limits)
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Default for Contact {
    fn default() -> Self {
        Self {
            email: std::env::var("NCBI_EMAIL").ok(),
            api_key: std::env::var("NCBI_API_KEY").ok(),
        }
    }
}

/// Client for the two E-utilities endpoints this tool uses
#[derive(Debug, Clone)]
pub struct EutilsClient {
    client: Client,
    contact: Contact,
    esearch_url: String,
    efetch_url: String,
}

impl EutilsClient {
    /// Create a client against the production NCBI endpoints
    pub fn new(contact: Contact) -> Result<Self, EutilsError> {
        Self::with_urls(
            contact,
            PUBMED_ESEARCH_URL.to_string(),
            PUBMED_EFETCH_URL.to_string(),
        )
    }

    /// Create a client against a custom base URL (for testing)
    pub fn with_base_url(contact: Contact, base: &str) -> Result<Self, EutilsError> {
        Self::with_urls(
            contact,
            format!("{}/esearch.fcgi", base),
            format!("{}/efetch.fcgi", base),
        )
    }

    fn with_urls(
        contact: Contact,
        esearch_url: String,
        efetch_url: String,
    ) -> Result<Self, EutilsError> {
        let client = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .pool_idle_timeout(Duration::from_secs(90))
            .build()?;

        Ok(Self {
            client,
            contact,
            esearch_url,
            efetch_url,
        })
    }

    /// Query parameters identifying this client to NCBI
    fn contact_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(email) = &self.contact.email {
            params.push(("email".to_string(), email.clone()));
        }
        if let Some(api_key) = &self.contact.api_key {
            params.push(("api_key".to_string(), api_key.clone()));
        }
        params
    }

    /// Build the ESearch URL for one query
    fn build_search_url(&self, term: &str, retmax: usize) -> String {
        let mut params = vec![
            ("db".to_string(), "pubmed".to_string()),
            ("term".to_string(), term.to_string()),
            ("retmax".to_string(), retmax.to_string()),
            ("sort".to_string(), "relevance".to_string()),
            ("retmode".to_string(), "xml".to_string()),
        ];
        params.extend(self.contact_params());

        let query = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.esearch_url, query)
    }

    /// Build the EFetch URL for a batch of PMIDs (one request, ids comma-joined)
    fn build_fetch_url(&self, ids: &[String]) -> String {
        let mut url = format!(
            "{}?db=pubmed&id={}&retmode=xml",
            self.efetch_url,
            ids.join(",")
        );
        for (key, value) in self.contact_params() {
            url.push_str(&format!("&{}={}", key, urlencoding::encode(&value)));
        }
        url
    }

    async fn get_body(&self, url: &str) -> Result<String, EutilsError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| EutilsError::Network(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(EutilsError::Api(format!(
                "PubMed API returned status: {}",
                response.status()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| EutilsError::Network(format!("Failed to read response: {}", e)))
    }

    /// Run one ESearch query, returning the (possibly empty) PMID list.
    ///
    /// At most `retmax` identifiers come back, ordered by relevance.
    pub async fn esearch(&self, term: &str, retmax: usize) -> Result<Vec<String>, EutilsError> {
        let url = self.build_search_url(term, retmax);
        tracing::debug!("Searching PubMed: {}", term);

        let xml = self.get_body(&url).await?;
        response::parse_search_response(&xml)
    }

    /// Fetch full records for `ids` in a single EFetch request
    pub async fn efetch(&self, ids: &[String]) -> Result<PubmedArticleSet, EutilsError> {
        let url = self.build_fetch_url(ids);
        tracing::debug!("Fetching {} PubMed records", ids.len());

        let xml = self.get_body(&url).await?;
        response::parse_fetch_response(&xml)
    }
}
