//! Data models for Semantic Scholar Graph API entities.
//!
//! All models use `#[serde(default)]` for optional fields and
//! `#[serde(rename_all = "camelCase")]` to match API naming.

mod paper;
mod set;

pub use paper::{AuthorRef, CitationContext, CitationResult, ExternalIds, Paper};
pub use set::WorkingSet;
