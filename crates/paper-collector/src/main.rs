//! Paper collector - entry point.
//!
//! Subcommands: `collect` (crawl from seeds), `filter` (re-filter a saved
//! snapshot without re-crawling), `counts` (citation-count report).

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use paper_collector::config::Config;
use paper_collector::expand::FrontierExpander;
use paper_collector::filters;
use paper_collector::pipeline::{CollectParams, CollectionDriver, logged_stage};
use paper_collector::{GraphClient, report, store};

#[derive(Parser, Debug)]
#[command(name = "paper-collector")]
#[command(about = "Collect papers related to seed papers via citations and references")]
#[command(version)]
struct Cli {
    /// Semantic Scholar API key (optional, enables higher rate limits)
    #[arg(long, env = "SEMANTIC_SCHOLAR_API_KEY", global = true)]
    api_key: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG", global = true)]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Recursively collect papers related to the seed papers
    Collect {
        /// Seed paper DOI (repeatable)
        #[arg(long = "seed", required = true)]
        seeds: Vec<String>,

        /// Keyword to filter papers by; a paper is kept when any keyword
        /// occurs in its title or abstract (repeatable)
        #[arg(long = "keyword", required = true)]
        keywords: Vec<String>,

        /// Drop papers published before this year
        #[arg(long)]
        year: Option<i32>,

        /// Recursive depth of papers to seek
        #[arg(long, default_value_t = 1)]
        depth: u32,

        /// Snapshot output path
        #[arg(long, default_value = "output/papers.json")]
        output: PathBuf,
    },

    /// Re-filter a saved snapshot without re-crawling
    Filter {
        /// Snapshot to load
        #[arg(long, default_value = "output/papers.json")]
        input: PathBuf,

        /// Filtered snapshot output path
        #[arg(long, default_value = "output/papers_filtered.json")]
        output: PathBuf,

        /// Keyword to filter papers by (repeatable)
        #[arg(long = "keyword", required = true)]
        keywords: Vec<String>,

        /// Drop papers published before this year
        #[arg(long)]
        year: Option<i32>,
    },

    /// Produce a citation-count report for a saved snapshot
    Counts {
        /// Snapshot to load
        #[arg(long, default_value = "output/papers.json")]
        input: PathBuf,

        /// Report output path
        #[arg(long, default_value = "output/paper_counts.json")]
        output: PathBuf,
    },
}

fn init_tracing(log_level: &str, json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting paper collector");

    let config = Config::new(cli.api_key);
    let concurrency = config.expand_concurrency;
    let client = GraphClient::new(config)?;

    match cli.command {
        Command::Collect { seeds, keywords, year, depth, output } => {
            let expander = FrontierExpander::new(client.clone(), concurrency);
            let params = CollectParams { seeds, keywords, year, depth, output };
            let set = CollectionDriver::new(client, expander, params).run().await?;
            tracing::info!(total = set.len(), "Total papers");
        }
        Command::Filter { input, output, keywords, year } => {
            let mut set = store::load(&input)?;
            if let Some(year) = year.filter(|y| *y > 0) {
                set = logged_stage("filter_year", set, |s| filters::filter_year(s, year));
            }
            set = logged_stage("filter_keywords", set, |s| filters::filter_keywords(s, &keywords));
            set = logged_stage("filter_duplicates", set, filters::filter_duplicates);
            store::save(&set, &output)?;
            tracing::info!(total = set.len(), "Total papers");
        }
        Command::Counts { input, output } => {
            let set = store::load(&input)?;
            report::write_citation_counts(&client, &set, &output).await?;
        }
    }

    Ok(())
}
