//! The per-category harvest pipeline: search, fetch, filter, write.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::eutils::response::PubmedArticleSet;
use crate::eutils::EutilsClient;
use crate::models::{AbstractRecord, Category, DateRange};

/// Reduce fetched records to output form, preserving input order.
///
/// Records without an abstract segment or without an article date are
/// dropped. Drops are counted and logged, never reported as errors.
pub fn normalize_articles(set: &PubmedArticleSet) -> Vec<AbstractRecord> {
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for article in &set.articles {
        let citation = &article.citation;
        let pmid = citation.pmid().unwrap_or("<no PMID>");

        match (citation.article.first_abstract(), citation.article.first_date()) {
            (Some(text), Some(date)) => {
                records.push(AbstractRecord::new(citation.article.title(), text, date));
            }
            (None, _) => {
                tracing::debug!("Skipping {}: no abstract", pmid);
                skipped += 1;
            }
            (_, None) => {
                tracing::debug!("Skipping {}: no article date", pmid);
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        tracing::debug!("Dropped {} records missing abstract or date", skipped);
    }

    records
}

/// Write the records as a single compact JSON array, overwriting `path`
pub fn write_records(records: &[AbstractRecord], path: &Path) -> Result<()> {
    let json = serde_json::to_vec(records).context("Failed to serialize abstract records")?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Run the whole pipeline for one category.
///
/// Returns the number of records written, or `None` when the search
/// matched nothing; no output file is created in that case.
pub async fn harvest_category(
    client: &EutilsClient,
    range: &DateRange,
    category: Category,
    max_docs: usize,
    output_dir: &Path,
) -> Result<Option<usize>> {
    let term = category.search_term(range);

    let ids = client
        .esearch(&term, max_docs)
        .await
        .with_context(|| format!("PubMed search failed for {} documents", category))?;

    if ids.is_empty() {
        tracing::info!("No {} documents matched the query", category);
        return Ok(None);
    }
    tracing::info!("Found {} {} documents", ids.len(), category);

    let set = client
        .efetch(&ids)
        .await
        .with_context(|| format!("PubMed fetch failed for {} documents", category))?;

    let records = normalize_articles(&set);
    let path = output_dir.join(category.output_filename());
    write_records(&records, &path)?;

    tracing::info!(
        "Wrote {} {} records to {}",
        records.len(),
        category,
        path.display()
    );

    Ok(Some(records.len()))
}
