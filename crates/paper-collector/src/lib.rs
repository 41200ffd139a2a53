//! Citation-graph paper collector
//!
//! Expands a seed set of papers (by DOI) into a larger candidate set by
//! recursively following reference and citation links through the Semantic
//! Scholar Graph API, then narrows the set by publication year and keywords,
//! deduplicating after every round.
//!
//! # Features
//!
//! - **Frontier expansion**: one breadth-first layer per round over the
//!   citation graph, to a configurable depth
//! - **Rate-limited**: a shared minimum inter-request interval across all
//!   outbound calls
//! - **Cached**: responses cached for a bounded freshness window, so
//!   re-runs and retries do not re-issue identical calls
//! - **Snapshots**: the working set is persisted as diffable JSON after
//!   every round
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//!
//! use paper_collector::{
//!     client::GraphClient,
//!     config::Config,
//!     expand::FrontierExpander,
//!     pipeline::{CollectParams, CollectionDriver},
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let concurrency = config.expand_concurrency;
//!     let client = GraphClient::new(config)?;
//!     let expander = FrontierExpander::new(client.clone(), concurrency);
//!
//!     let params = CollectParams {
//!         seeds: vec!["10.1016/j.ins.2019.11.042".to_string()],
//!         keywords: vec!["texture".to_string(), "spectral".to_string()],
//!         year: Some(2016),
//!         depth: 2,
//!         output: PathBuf::from("output/papers.json"),
//!     };
//!
//!     let set = CollectionDriver::new(client, expander, params).run().await?;
//!     println!("collected {} papers", set.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod expand;
pub mod filters;
pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod report;
pub mod store;

pub use client::GraphClient;
pub use config::Config;
pub use error::{ClientError, CollectError};
