//! Frontier expansion over the citation graph.

use futures::stream::{self, StreamExt};
use tracing::{info, warn};

use crate::client::GraphClient;
use crate::models::{Paper, WorkingSet};
use crate::normalize;

/// Expands the working set by one breadth-first layer per invocation.
///
/// For every paper currently in the set, one reference lookup and one
/// citation lookup are issued, keyed by the paper's DOI. The results are
/// normalized and appended; pre-expansion papers are retained. Repeated
/// invocation across rounds realizes a breadth-first traversal rooted at
/// the seeds, with deduplication playing the role of the visited set.
#[derive(Debug, Clone)]
pub struct FrontierExpander {
    client: GraphClient,
    concurrency: usize,
}

impl FrontierExpander {
    /// Create an expander over the given client.
    #[must_use]
    pub fn new(client: GraphClient, concurrency: usize) -> Self {
        Self { client, concurrency: concurrency.max(1) }
    }

    /// Expand the set in place, appending all fetched neighbors.
    ///
    /// Lookups for distinct papers run concurrently up to the configured
    /// width; the client's shared rate limiter keeps the aggregate request
    /// interval intact, and `buffered` keeps the append order deterministic.
    /// A failed lookup contributes zero neighbors and never aborts the round.
    pub async fn expand(&self, set: &mut WorkingSet) {
        let dois: Vec<String> = set
            .iter()
            .filter_map(|paper| match paper.doi() {
                Some(doi) if !doi.is_empty() => Some(doi.to_string()),
                _ => {
                    warn!(title = paper.title_or_default(), "no DOI for paper, skipping expansion");
                    None
                }
            })
            .collect();

        let gathered: Vec<Vec<Paper>> = stream::iter(dois)
            .map(|doi| {
                let client = self.client.clone();
                async move { Self::neighbors(&client, &doi).await }
            })
            .buffered(self.concurrency)
            .collect()
            .await;

        let mut neighbors: Vec<Paper> = gathered.into_iter().flatten().collect();
        normalize::normalize_all(&mut neighbors);

        info!(appended = neighbors.len(), "expanded working set");
        set.extend(neighbors);
    }

    /// Fetch references then citations for one paper.
    async fn neighbors(client: &GraphClient, doi: &str) -> Vec<Paper> {
        let mut found = Vec::new();

        match client.get_references(doi).await {
            Ok(references) => found.extend(references),
            Err(err) => warn!(doi, error = %err, "reference lookup failed"),
        }

        match client.get_citations(doi).await {
            Ok(citations) => found.extend(citations),
            Err(err) => warn!(doi, error = %err, "citation lookup failed"),
        }

        found
    }
}
