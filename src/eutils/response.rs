//! Typed views of E-utilities XML responses.
//!
//! Only the elements this tool consumes are modelled; everything else in
//! the (large) PubMed DTD is ignored during deserialization. A fetch
//! record missing its `MedlineCitation`/`Article`/`ArticleTitle` envelope
//! is malformed for our purposes and fails the whole parse.

use quick_xml::de::from_str;
use serde::Deserialize;

use crate::eutils::EutilsError;
use crate::models::PubDate;

/// Root of an EFetch response
#[derive(Debug, Deserialize)]
pub struct PubmedArticleSet {
    #[serde(rename = "PubmedArticle", default)]
    pub articles: Vec<PubmedArticle>,
}

/// One fetched PubMed record
#[derive(Debug, Deserialize)]
pub struct PubmedArticle {
    #[serde(rename = "MedlineCitation")]
    pub citation: MedlineCitation,
}

#[derive(Debug, Deserialize)]
pub struct MedlineCitation {
    #[serde(rename = "PMID")]
    pmid: Option<Pmid>,
    #[serde(rename = "Article")]
    pub article: Article,
}

impl MedlineCitation {
    /// PMID text, when the citation carries one (used for log messages)
    pub fn pmid(&self) -> Option<&str> {
        self.pmid.as_ref().map(|p| p.id.as_str())
    }
}

#[derive(Debug, Deserialize)]
struct Pmid {
    #[serde(rename = "$text")]
    id: String,
}

/// The bibliographic core of a record: title, abstract, article dates.
#[derive(Debug, Deserialize)]
pub struct Article {
    #[serde(rename = "ArticleTitle")]
    title: ArticleTitle,
    #[serde(rename = "Abstract")]
    r#abstract: Option<Abstract>,
    #[serde(rename = "ArticleDate", default)]
    article_dates: Vec<ArticleDate>,
}

impl Article {
    pub fn title(&self) -> &str {
        &self.title.title
    }

    /// First abstract segment, when an abstract with at least one segment
    /// exists. Records without one are dropped downstream.
    pub fn first_abstract(&self) -> Option<&str> {
        self.r#abstract
            .as_ref()
            .and_then(|a| a.texts.first())
            .map(|t| t.text.as_str())
    }

    /// First `ArticleDate` entry; later entries are ignored
    pub fn first_date(&self) -> Option<PubDate> {
        self.article_dates
            .first()
            .map(|d| PubDate::new(&d.year, &d.month, &d.day))
    }
}

#[derive(Debug, Deserialize)]
struct ArticleTitle {
    #[serde(rename = "$text", default)]
    title: String,
}

#[derive(Debug, Deserialize)]
struct Abstract {
    #[serde(rename = "AbstractText", default)]
    texts: Vec<AbstractText>,
}

#[derive(Debug, Deserialize)]
struct AbstractText {
    #[serde(rename = "$text", default)]
    text: String,
}

/// Electronic publication date; all three components are required by the
/// DTD and a record violating that aborts the parse.
#[derive(Debug, Deserialize)]
pub struct ArticleDate {
    #[serde(rename = "Year")]
    year: String,
    #[serde(rename = "Month")]
    month: String,
    #[serde(rename = "Day")]
    day: String,
}

/// Parse an ESearch response into its PMID list
pub fn parse_search_response(xml: &str) -> Result<Vec<String>, EutilsError> {
    #[derive(Debug, Deserialize)]
    struct ESearchResult {
        #[serde(rename = "IdList")]
        id_list: IdList,
    }

    #[derive(Debug, Deserialize)]
    struct IdList {
        #[serde(rename = "Id", default)]
        ids: Vec<String>,
    }

    let result: ESearchResult = from_str(xml)
        .map_err(|e| EutilsError::Parse(format!("Failed to parse PubMed search XML: {}", e)))?;

    Ok(result.id_list.ids)
}

/// Parse an EFetch response into the typed article set
pub fn parse_fetch_response(xml: &str) -> Result<PubmedArticleSet, EutilsError> {
    from_str(xml)
        .map_err(|e| EutilsError::Parse(format!("Failed to parse PubMed fetch XML: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_response() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8" ?>
<!DOCTYPE eSearchResult PUBLIC "-//NLM//DTD esearch 20060628//EN" "https://eutils.ncbi.nlm.nih.gov/eutils/dtd/20060628/esearch.dtd">
<eSearchResult>
    <Count>3</Count>
    <RetMax>3</RetMax>
    <RetStart>0</RetStart>
    <IdList>
        <Id>36464825</Id>
        <Id>36464103</Id>
        <Id>36463871</Id>
    </IdList>
    <TranslationSet/>
</eSearchResult>"#;

        let ids = parse_search_response(xml).unwrap();
        assert_eq!(ids, vec!["36464825", "36464103", "36463871"]);
    }

    #[test]
    fn test_parse_search_response_empty_id_list() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8" ?>
<eSearchResult>
    <Count>0</Count>
    <RetMax>0</RetMax>
    <RetStart>0</RetStart>
    <IdList>
    </IdList>
</eSearchResult>"#;

        let ids = parse_search_response(xml).unwrap();
        assert!(ids.is_empty());
    }

    #[test]
    fn test_parse_search_response_invalid_xml() {
        let result = parse_search_response("this is not xml");
        assert!(matches!(result, Err(EutilsError::Parse(_))));
    }

    #[test]
    fn test_parse_fetch_response() {
        let xml = r#"<?xml version="1.0" ?>
<!DOCTYPE PubmedArticleSet PUBLIC "-//NLM//DTD PubMedArticle, 1st January 2023//EN" "https://dtd.nlm.nih.gov/ncbi/pubmed/out/pubmed_230101.dtd">
<PubmedArticleSet>
<PubmedArticle>
    <MedlineCitation Status="MEDLINE" Owner="NLM">
        <PMID Version="1">36464825</PMID>
        <Article PubModel="Print-Electronic">
            <ArticleTitle>A review of interesting findings.</ArticleTitle>
            <Abstract>
                <AbstractText Label="BACKGROUND">First segment.</AbstractText>
                <AbstractText Label="METHODS">Second segment.</AbstractText>
            </Abstract>
            <ArticleDate DateType="Electronic">
                <Year>2023</Year>
                <Month>06</Month>
                <Day>15</Day>
            </ArticleDate>
            <ArticleDate DateType="Electronic">
                <Year>2024</Year>
                <Month>01</Month>
                <Day>02</Day>
            </ArticleDate>
        </Article>
    </MedlineCitation>
</PubmedArticle>
</PubmedArticleSet>"#;

        let set = parse_fetch_response(xml).unwrap();
        assert_eq!(set.articles.len(), 1);

        let citation = &set.articles[0].citation;
        assert_eq!(citation.pmid(), Some("36464825"));
        assert_eq!(citation.article.title(), "A review of interesting findings.");
        assert_eq!(citation.article.first_abstract(), Some("First segment."));

        let date = citation.article.first_date().unwrap();
        assert_eq!(date, PubDate::new("2023", "06", "15"));
    }

    #[test]
    fn test_parse_fetch_response_missing_abstract_and_date() {
        let xml = r#"<PubmedArticleSet>
<PubmedArticle>
    <MedlineCitation>
        <PMID Version="1">100</PMID>
        <Article>
            <ArticleTitle>No abstract here.</ArticleTitle>
        </Article>
    </MedlineCitation>
</PubmedArticle>
</PubmedArticleSet>"#;

        let set = parse_fetch_response(xml).unwrap();
        let article = &set.articles[0].citation.article;
        assert_eq!(article.first_abstract(), None);
        assert_eq!(article.first_date(), None);
    }

    #[test]
    fn test_parse_fetch_response_empty_abstract_element() {
        let xml = r#"<PubmedArticleSet>
<PubmedArticle>
    <MedlineCitation>
        <Article>
            <ArticleTitle>Empty abstract element.</ArticleTitle>
            <Abstract>
            </Abstract>
        </Article>
    </MedlineCitation>
</PubmedArticle>
</PubmedArticleSet>"#;

        let set = parse_fetch_response(xml).unwrap();
        assert_eq!(set.articles[0].citation.article.first_abstract(), None);
    }

    #[test]
    fn test_parse_fetch_response_missing_title_is_error() {
        let xml = r#"<PubmedArticleSet>
<PubmedArticle>
    <MedlineCitation>
        <Article>
            <Abstract>
                <AbstractText>Orphaned abstract.</AbstractText>
            </Abstract>
        </Article>
    </MedlineCitation>
</PubmedArticle>
</PubmedArticleSet>"#;

        let result = parse_fetch_response(xml);
        assert!(matches!(result, Err(EutilsError::Parse(_))));
    }

    #[test]
    fn test_parse_fetch_response_empty_set() {
        let set = parse_fetch_response("<PubmedArticleSet></PubmedArticleSet>").unwrap();
        assert!(set.articles.is_empty());
    }
}
