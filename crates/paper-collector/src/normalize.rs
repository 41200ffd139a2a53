//! Normalization of remote paper records.
//!
//! Remote records arrive with nullable optional fields. Every paper entering
//! the working set is normalized immediately after expansion, before any
//! filter runs, so the filters can assume the fields are present: a missing
//! `title` or `abstract` becomes the empty string, a missing `year` becomes
//! the sentinel `0`, which positive year filters always exclude.

use crate::models::Paper;

/// Sentinel year for records with an unknown publication year.
pub const UNKNOWN_YEAR: i32 = 0;

/// Fill absent optional fields with their defaults. Idempotent.
pub fn normalize(paper: &mut Paper) {
    if paper.title.is_none() {
        paper.title = Some(String::new());
    }
    if paper.r#abstract.is_none() {
        paper.r#abstract = Some(String::new());
    }
    if paper.year.is_none() {
        paper.year = Some(UNKNOWN_YEAR);
    }
}

/// Normalize a batch of papers in place.
pub fn normalize_all(papers: &mut [Paper]) {
    for paper in papers {
        normalize(paper);
    }
}
