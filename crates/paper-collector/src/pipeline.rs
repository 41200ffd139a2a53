//! Collection pipeline driver.
//!
//! Drives `depth` rounds of expand -> filter -> persist over the working
//! set, reporting before/after counts around every stage. The count
//! instrumentation lives here, not in the filters, so the filters stay pure.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::client::GraphClient;
use crate::error::{CollectError, CollectResult};
use crate::expand::FrontierExpander;
use crate::filters;
use crate::models::WorkingSet;
use crate::normalize;
use crate::store;

/// Parameters of one collection run.
#[derive(Debug, Clone)]
pub struct CollectParams {
    /// Seed DOIs to start the crawl from.
    pub seeds: Vec<String>,

    /// Keywords to filter papers by. A paper is kept when any keyword
    /// occurs in its title or abstract.
    pub keywords: Vec<String>,

    /// Publication-year threshold. `None` or a non-positive year disables
    /// the year filter.
    pub year: Option<i32>,

    /// Number of expansion rounds.
    pub depth: u32,

    /// Snapshot output path.
    pub output: PathBuf,
}

impl CollectParams {
    /// Validate the parameters before any network activity.
    pub fn validate(&self) -> CollectResult<()> {
        if self.seeds.is_empty() {
            return Err(CollectError::NoSeeds);
        }
        if self.keywords.is_empty() {
            return Err(CollectError::NoKeywords);
        }
        Ok(())
    }

    /// The year threshold, if year filtering is enabled.
    #[must_use]
    pub fn effective_year(&self) -> Option<i32> {
        self.year.filter(|year| *year > 0)
    }
}

/// Orchestrates seeding, expansion rounds, filters and persistence.
pub struct CollectionDriver {
    client: GraphClient,
    expander: FrontierExpander,
    params: CollectParams,
}

impl CollectionDriver {
    /// Create a driver for one run.
    #[must_use]
    pub fn new(client: GraphClient, expander: FrontierExpander, params: CollectParams) -> Self {
        Self { client, expander, params }
    }

    /// Run the full pipeline and return the final working set.
    ///
    /// A snapshot is persisted after every round and at terminal. An empty
    /// result is a valid terminal state when the filters removed everything;
    /// it is an error only when no seed could be fetched at all.
    pub async fn run(&self) -> CollectResult<WorkingSet> {
        self.params.validate()?;

        let mut set = self.seed_set().await?;

        for round in 1..=self.params.depth {
            info!(round, "collection round");
            set = self.round(set).await?;
            store::save(&set, &self.params.output)?;
        }

        store::save(&set, &self.params.output)?;
        info!(total = set.len(), "collection finished");
        Ok(set)
    }

    /// Fetch one paper per seed. A failed seed is skipped, not fatal; an
    /// entirely empty initial set is.
    async fn seed_set(&self) -> CollectResult<WorkingSet> {
        let mut set = WorkingSet::new();

        for seed in &self.params.seeds {
            match self.client.get_paper(seed).await {
                Ok(mut paper) => {
                    normalize::normalize(&mut paper);
                    set.push(paper);
                }
                Err(err) => warn!(seed, error = %err, "seed unavailable, skipping"),
            }
        }

        if set.is_empty() {
            return Err(CollectError::SeedsUnavailable);
        }

        info!(seeds = set.len(), "initialized working set");
        Ok(set)
    }

    /// One expand -> filter -> filter -> filter pass.
    async fn round(&self, mut set: WorkingSet) -> CollectResult<WorkingSet> {
        let before = set.len();
        self.expander.expand(&mut set).await;
        info!(stage = "expand", before, after = set.len(), "pipeline stage");

        if let Some(year) = self.params.effective_year() {
            set = logged_stage("filter_year", set, |s| filters::filter_year(s, year));
        }

        set = logged_stage("filter_keywords", set, |s| {
            filters::filter_keywords(s, &self.params.keywords)
        });
        set = logged_stage("filter_duplicates", set, filters::filter_duplicates);

        Ok(set)
    }
}

/// Run a stage, logging its before/after counts.
pub fn logged_stage<F>(stage: &str, set: WorkingSet, f: F) -> WorkingSet
where
    F: FnOnce(WorkingSet) -> WorkingSet,
{
    let before = set.len();
    let set = f(set);
    info!(stage, before, after = set.len(), "pipeline stage");
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> CollectParams {
        CollectParams {
            seeds: vec!["10.1/seed".to_string()],
            keywords: vec!["texture".to_string()],
            year: None,
            depth: 1,
            output: PathBuf::from("output/papers.json"),
        }
    }

    #[test]
    fn test_validate_rejects_empty_seeds() {
        let params = CollectParams { seeds: vec![], ..params() };
        assert!(matches!(params.validate(), Err(CollectError::NoSeeds)));
    }

    #[test]
    fn test_validate_rejects_empty_keywords() {
        let params = CollectParams { keywords: vec![], ..params() };
        assert!(matches!(params.validate(), Err(CollectError::NoKeywords)));
    }

    #[test]
    fn test_effective_year_treats_zero_as_disabled() {
        assert_eq!(CollectParams { year: Some(0), ..params() }.effective_year(), None);
        assert_eq!(CollectParams { year: Some(2016), ..params() }.effective_year(), Some(2016));
        assert_eq!(CollectParams { year: None, ..params() }.effective_year(), None);
    }

    #[test]
    fn test_logged_stage_applies_function() {
        let set: WorkingSet = vec![crate::models::Paper::default()].into();
        let out = logged_stage("drop_all", set, |_| WorkingSet::new());
        assert!(out.is_empty());
    }
}
