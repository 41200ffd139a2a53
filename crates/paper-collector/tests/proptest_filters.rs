//! Property-based tests for the filter laws.

use proptest::prelude::*;

use paper_collector::filters::{filter_duplicates, filter_keywords, filter_year};
use paper_collector::models::{ExternalIds, Paper, WorkingSet};

/// Generate arbitrary normalized papers for testing.
fn arb_paper() -> impl Strategy<Value = Paper> {
    (
        proptest::option::of("10\\.[0-9]{1,4}/[a-z0-9]{1,8}"), // doi
        "[A-Za-z0-9 ]{0,40}",                                  // title
        "[A-Za-z0-9 .,]{0,80}",                                // abstract
        0i32..2030,                                            // year
    )
        .prop_map(|(doi, title, r#abstract, year)| Paper {
            title: Some(title),
            r#abstract: Some(r#abstract),
            year: Some(year),
            external_ids: doi.map(|d| ExternalIds { doi: Some(d), ..ExternalIds::default() }),
            ..Paper::default()
        })
}

fn arb_set() -> impl Strategy<Value = WorkingSet> {
    proptest::collection::vec(arb_paper(), 0..20).prop_map(WorkingSet::from)
}

proptest! {
    /// Deduplicating twice changes nothing.
    #[test]
    fn filter_duplicates_is_idempotent(set in arb_set()) {
        let once = filter_duplicates(set);
        let twice = filter_duplicates(once.clone());
        prop_assert_eq!(once, twice);
    }

    /// After deduplication every surviving paper has a distinct DOI.
    #[test]
    fn filter_duplicates_leaves_distinct_dois(set in arb_set()) {
        let filtered = filter_duplicates(set);
        let dois: Vec<_> = filtered.iter().filter_map(|p| p.doi()).collect();
        let mut unique = dois.clone();
        unique.sort_unstable();
        unique.dedup();
        prop_assert_eq!(dois.len(), unique.len());
    }

    /// Every retained paper satisfies the year threshold, and the pass never grows the set.
    #[test]
    fn filter_year_retains_only_matching_years(set in arb_set(), year in 0i32..2030) {
        let before = set.len();
        let filtered = filter_year(set, year);
        prop_assert!(filtered.len() <= before);
        for paper in &filtered {
            prop_assert!(paper.year.unwrap_or_default() >= year);
        }
    }

    /// Retained papers contain at least one keyword; dropped papers contain none.
    #[test]
    fn filter_keywords_partitions_by_substring_match(
        set in arb_set(),
        keywords in proptest::collection::vec("[a-z]{1,5}", 1..4),
    ) {
        let matches = |paper: &Paper| {
            let title = paper.title.clone().unwrap_or_default();
            let r#abstract = paper.r#abstract.clone().unwrap_or_default();
            keywords.iter().any(|kw| title.contains(kw.as_str()) || r#abstract.contains(kw.as_str()))
        };

        let expected: Vec<bool> = set.iter().map(|p| matches(p)).collect();
        let filtered = filter_keywords(set, &keywords);

        prop_assert_eq!(filtered.len(), expected.iter().filter(|kept| **kept).count());
        for paper in &filtered {
            prop_assert!(matches(paper));
        }
    }
}
