//! Configuration for the collector.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Graph API endpoint.
    pub const GRAPH_API: &str = "https://api.semanticscholar.org/graph/v1";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Minimum interval between requests without API key (200ms = 5 req/s).
    pub const MIN_REQUEST_INTERVAL: Duration = Duration::from_millis(200);

    /// Minimum interval between requests with API key (10ms = 100 req/s).
    pub const MIN_REQUEST_INTERVAL_WITH_KEY: Duration = Duration::from_millis(10);

    /// Cache freshness window (5 minutes).
    pub const CACHE_TTL: Duration = Duration::from_secs(300);

    /// Maximum cache size.
    pub const CACHE_MAX_SIZE: u64 = 1000;

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 10;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);

    /// Concurrent neighbor lookups per expansion round.
    pub const EXPAND_CONCURRENCY: usize = 4;
}

/// Paper field sets for API requests.
pub mod fields {
    /// Fields requested for every collected paper.
    pub const DEFAULT: &[&str] = &["externalIds", "url", "title", "abstract", "year", "authors"];

    /// Fields for the citation-count report.
    pub const COUNTS: &[&str] =
        &["externalIds", "url", "title", "abstract", "year", "authors", "citationCount"];
}

/// Collector configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Semantic Scholar API key (optional).
    pub api_key: Option<String>,

    /// Base URL for the Graph API (overridable for mock servers).
    pub graph_api_url: String,

    /// Fields to request for each paper.
    pub fields: Vec<String>,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Minimum interval between outbound requests.
    pub min_request_interval: Duration,

    /// Cache freshness window.
    pub cache_ttl: Duration,

    /// Maximum cache size.
    pub cache_max_size: u64,

    /// Concurrent neighbor lookups per expansion round.
    pub expand_concurrency: usize,
}

impl Config {
    /// Create a new configuration with optional API key.
    ///
    /// The minimum request interval is adjusted based on API key presence:
    /// without key 5 req/s, with key 100 req/s.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        let has_key = api_key.is_some();
        Self {
            api_key,
            graph_api_url: api::GRAPH_API.to_string(),
            fields: fields::DEFAULT.iter().map(ToString::to_string).collect(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            min_request_interval: if has_key {
                api::MIN_REQUEST_INTERVAL_WITH_KEY
            } else {
                api::MIN_REQUEST_INTERVAL
            },
            cache_ttl: api::CACHE_TTL,
            cache_max_size: api::CACHE_MAX_SIZE,
            expand_concurrency: api::EXPAND_CONCURRENCY,
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_key: None,
            graph_api_url: format!("{}/graph/v1", base_url),
            fields: fields::DEFAULT.iter().map(ToString::to_string).collect(),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            min_request_interval: Duration::from_millis(0), // No delay in tests
            cache_ttl: Duration::from_secs(0),              // No caching in tests
            cache_max_size: 0,
            expand_concurrency: 1,
        }
    }

    /// Create configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let api_key = std::env::var("SEMANTIC_SCHOLAR_API_KEY").ok();
        Self::new(api_key)
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}
