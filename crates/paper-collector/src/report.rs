//! Citation-count report over a collected snapshot.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::client::GraphClient;
use crate::config::fields;
use crate::error::CollectResult;
use crate::models::WorkingSet;

/// One row of the citation-count report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationCount {
    /// Paper DOI.
    pub doi: String,

    /// Paper title from the snapshot.
    pub title: String,

    /// Citation count at report time.
    pub citation_count: i32,
}

/// Re-fetch every snapshot paper with `citationCount` requested and return
/// the rows sorted by citation count, descending.
///
/// Papers without a DOI, or whose re-fetch fails, are logged and skipped;
/// they do not abort the report.
pub async fn citation_counts(
    client: &GraphClient,
    set: &WorkingSet,
) -> Vec<CitationCount> {
    let fields = fields::COUNTS.join(",");
    let mut rows = Vec::new();

    for paper in set {
        let Some(doi) = paper.doi() else {
            warn!(title = paper.title_or_default(), "no DOI for paper, skipping count");
            continue;
        };

        info!(title = paper.title_or_default(), "getting citation count");
        match client.get_paper_with(doi, &fields).await {
            Ok(fetched) => rows.push(CitationCount {
                doi: doi.to_string(),
                title: paper.title_or_default().to_string(),
                citation_count: fetched.citation_count.unwrap_or_default(),
            }),
            Err(err) => warn!(doi, error = %err, "count lookup failed, skipping"),
        }
    }

    rows.sort_by(|a, b| b.citation_count.cmp(&a.citation_count));
    rows
}

/// Build the report for a snapshot and write it to `path` as stable JSON.
pub async fn write_citation_counts(
    client: &GraphClient,
    set: &WorkingSet,
    path: &Path,
) -> CollectResult<()> {
    let rows = citation_counts(client, set).await;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, serde_json::to_string_pretty(&rows)?)?;

    info!(path = %path.display(), rows = rows.len(), "wrote citation-count report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_citation_count_serializes_camel_case() {
        let row = CitationCount {
            doi: "10.1/x".to_string(),
            title: "A paper".to_string(),
            citation_count: 7,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["citationCount"], 7);
        assert_eq!(json["doi"], "10.1/x");
    }
}
