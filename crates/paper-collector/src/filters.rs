//! Set-reduction filters over the working set.
//!
//! All three filters are pure `WorkingSet -> WorkingSet` passes. Before/after
//! counts are reported by the pipeline instrumentation, not here, so the
//! filters stay independently testable.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::models::WorkingSet;

/// Retain papers with `year >= year`.
///
/// A caller with no year configured must skip this filter rather than pass a
/// sentinel; the function itself always filters.
#[must_use]
pub fn filter_year(set: WorkingSet, year: i32) -> WorkingSet {
    set.into_iter().filter(|paper| paper.year.unwrap_or_default() >= year).collect()
}

/// Retain papers where at least one keyword is a case-sensitive substring of
/// the title or abstract.
///
/// Keywords combine with logical OR: the first match keeps the paper.
#[must_use]
pub fn filter_keywords(set: WorkingSet, keywords: &[String]) -> WorkingSet {
    set.into_iter()
        .filter(|paper| {
            let title = paper.title.as_deref().unwrap_or_default();
            let r#abstract = paper.r#abstract.as_deref().unwrap_or_default();
            keywords.iter().any(|kw| title.contains(kw.as_str()) || r#abstract.contains(kw.as_str()))
        })
        .collect()
}

/// Drop duplicate papers, keeping the first occurrence of each DOI.
///
/// Papers without a DOI cannot be deduplicated or expanded further and are
/// dropped (logged with their title). Duplicates keyed by distinct identifier
/// variants of the same work (e.g. preprint vs. published DOI) are not merged.
#[must_use]
pub fn filter_duplicates(set: WorkingSet) -> WorkingSet {
    let mut seen: HashSet<String> = HashSet::new();

    set.into_iter()
        .filter(|paper| match paper.doi() {
            Some(doi) if !doi.is_empty() => {
                let fresh = seen.insert(doi.to_string());
                if !fresh {
                    debug!(doi, title = paper.title_or_default(), "dropping duplicate paper");
                }
                fresh
            }
            _ => {
                warn!(title = paper.title_or_default(), "no DOI for paper, dropping");
                false
            }
        })
        .collect()
}
