//! Paper data model matching the Semantic Scholar Graph API schema.

use serde::{Deserialize, Serialize};

/// A research paper record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    /// Semantic Scholar paper ID. Null for some citing/cited records.
    #[serde(default)]
    pub paper_id: Option<String>,

    /// Paper title.
    #[serde(default)]
    pub title: Option<String>,

    /// Paper abstract.
    #[serde(default)]
    pub r#abstract: Option<String>,

    /// Publication year.
    #[serde(default)]
    pub year: Option<i32>,

    /// Landing page URL, passed through unmodified.
    #[serde(default)]
    pub url: Option<String>,

    /// List of authors, passed through unmodified.
    #[serde(default)]
    pub authors: Vec<AuthorRef>,

    /// External identifiers (DOI, ArXiv, PubMed, etc.).
    #[serde(default)]
    pub external_ids: Option<ExternalIds>,

    /// Number of citations. Only requested by the counts report.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation_count: Option<i32>,
}

impl Paper {
    /// Get the paper title, falling back to the empty string.
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    /// Get the DOI if available.
    #[must_use]
    pub fn doi(&self) -> Option<&str> {
        self.external_ids.as_ref()?.doi.as_deref()
    }
}

/// Author reference as returned on paper records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRef {
    /// Semantic Scholar author ID.
    #[serde(default)]
    pub author_id: Option<String>,

    /// Author name.
    #[serde(default)]
    pub name: Option<String>,
}

/// External identifiers for a paper.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalIds {
    /// Digital Object Identifier.
    #[serde(rename = "DOI", default)]
    pub doi: Option<String>,

    /// ArXiv preprint ID.
    #[serde(rename = "ArXiv", default)]
    pub arxiv: Option<String>,

    /// PubMed ID.
    #[serde(rename = "PubMed", default)]
    pub pubmed: Option<String>,

    /// PubMed Central ID.
    #[serde(rename = "PubMedCentral", default)]
    pub pmc: Option<String>,

    /// Microsoft Academic Graph ID.
    #[serde(rename = "MAG", default)]
    pub mag: Option<String>,

    /// Semantic Scholar Corpus ID.
    #[serde(rename = "CorpusId", default)]
    pub corpus_id: Option<i64>,

    /// DBLP key.
    #[serde(rename = "DBLP", default)]
    pub dblp: Option<String>,

    /// ACL Anthology ID.
    #[serde(rename = "ACL", default)]
    pub acl: Option<String>,
}

/// One entry of a citation or reference listing.
///
/// The citations endpoint wraps each neighbor as `citingPaper`, the
/// references endpoint as `citedPaper`; the aliases accept both.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationContext {
    /// The citing or cited paper.
    #[serde(alias = "citingPaper", alias = "citedPaper")]
    pub paper: Option<Paper>,
}

/// Citation or reference list result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitationResult {
    /// Offset for pagination.
    #[serde(default)]
    pub offset: i32,

    /// Next offset if more results available.
    #[serde(default)]
    pub next: Option<i32>,

    /// Neighbor data.
    #[serde(default)]
    pub data: Vec<CitationContext>,
}

impl CitationResult {
    /// Extract the neighbor papers, dropping entries without a paper object.
    #[must_use]
    pub fn into_papers(self) -> Vec<Paper> {
        self.data.into_iter().filter_map(|entry| entry.paper).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paper_deserialize_minimal() {
        let json = r#"{"paperId": "abc123"}"#;
        let paper: Paper = serde_json::from_str(json).unwrap();
        assert_eq!(paper.paper_id.as_deref(), Some("abc123"));
        assert!(paper.title.is_none());
        assert!(paper.authors.is_empty());
        assert!(paper.doi().is_none());
    }

    #[test]
    fn test_paper_deserialize_full() {
        let json = r#"{
            "paperId": "abc123",
            "title": "Test Paper",
            "abstract": "This is a test.",
            "year": 2024,
            "url": "https://example.org/abc123",
            "authors": [{"authorId": "auth1", "name": "John Doe"}],
            "externalIds": {"DOI": "10.1234/test"}
        }"#;

        let paper: Paper = serde_json::from_str(json).unwrap();
        assert_eq!(paper.title_or_default(), "Test Paper");
        assert_eq!(paper.year, Some(2024));
        assert_eq!(paper.doi(), Some("10.1234/test"));
        assert_eq!(paper.authors[0].name.as_deref(), Some("John Doe"));
    }

    #[test]
    fn test_citation_result_extracts_both_wrappers() {
        let citing = r#"{"offset": 0, "data": [{"citingPaper": {"paperId": "p1"}}]}"#;
        let cited = r#"{"offset": 0, "data": [{"citedPaper": {"paperId": "p2"}}]}"#;

        let citing: CitationResult = serde_json::from_str(citing).unwrap();
        let cited: CitationResult = serde_json::from_str(cited).unwrap();

        assert_eq!(citing.into_papers()[0].paper_id.as_deref(), Some("p1"));
        assert_eq!(cited.into_papers()[0].paper_id.as_deref(), Some("p2"));
    }

    #[test]
    fn test_citation_result_drops_null_neighbors() {
        let json = r#"{"offset": 0, "data": [{"citedPaper": null}, {"citedPaper": {"paperId": "p3"}}]}"#;
        let result: CitationResult = serde_json::from_str(json).unwrap();
        let papers = result.into_papers();
        assert_eq!(papers.len(), 1);
        assert_eq!(papers[0].paper_id.as_deref(), Some("p3"));
    }
}
