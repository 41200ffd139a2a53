//! Semantic Scholar Graph API client.
//!
//! Provides an async HTTP client with:
//! - Connection pooling via reqwest
//! - Retry middleware with exponential backoff
//! - A shared rate limiter enforcing a minimum inter-request interval
//! - Response caching with a bounded freshness window
//!
//! The citations and references operations deliberately swallow non-2xx
//! responses and transport failures into an empty list: one unreachable
//! node must not halt a whole collection run. Failures are logged with the
//! triggering paper ID.

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use moka::future::Cache;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use tracing::warn;

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::{CitationResult, Paper};

/// Semantic Scholar Graph API client.
#[derive(Clone)]
pub struct GraphClient {
    /// HTTP client with middleware.
    client: ClientWithMiddleware,

    /// Response cache.
    cache: Cache<String, serde_json::Value>,

    /// Shared rate limiter. None when the configured interval is zero.
    /// Shared across clones so the interval holds globally.
    limiter: Option<Arc<DefaultDirectRateLimiter>>,

    /// API key (optional).
    api_key: Option<String>,

    /// Graph API base URL.
    graph_api_url: String,

    /// Fields requested for each paper.
    fields: Vec<String>,
}

impl GraphClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            "application/json".parse().expect("valid content-type header"),
        );

        if let Some(ref key) = config.api_key {
            headers.insert("x-api-key", key.parse()?);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        let retry_policy = ExponentialBackoff::builder()
            .retry_bounds(Duration::from_secs(1), Duration::from_secs(30))
            .build_with_max_retries(3);

        let client = ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        let cache = Cache::builder()
            .max_capacity(config.cache_max_size)
            .time_to_live(config.cache_ttl)
            .build();

        // Burst of one: at most one request per interval, across all clones.
        let limiter = Quota::with_period(config.min_request_interval)
            .map(|quota| Arc::new(RateLimiter::direct(quota.allow_burst(NonZeroU32::MIN))));

        Ok(Self {
            client,
            cache,
            limiter,
            api_key: config.api_key,
            graph_api_url: config.graph_api_url,
            fields: config.fields,
        })
    }

    /// Check if an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Get the canonical record for a paper ID.
    ///
    /// # Errors
    ///
    /// Returns error on API failure or unknown ID.
    pub async fn get_paper(&self, paper_id: &str) -> ClientResult<Paper> {
        let fields = self.fields.join(",");
        self.get_paper_with(paper_id, &fields).await
    }

    /// Get a paper record with an explicit field list.
    ///
    /// Used by the citation-count report, which requests `citationCount`
    /// on top of the collection fields.
    ///
    /// # Errors
    ///
    /// Returns error on API failure or unknown ID.
    pub async fn get_paper_with(&self, paper_id: &str, fields: &str) -> ClientResult<Paper> {
        let url = format!("{}/paper/{}", self.graph_api_url, paper_id);
        let params = vec![("fields".to_string(), fields.to_string())];

        self.get(&url, &params).await
    }

    /// Get the papers a paper cites.
    ///
    /// A non-success status or transport failure yields an empty list, not
    /// an error; the event is logged.
    ///
    /// # Errors
    ///
    /// Returns error only when a successful response cannot be parsed.
    pub async fn get_references(&self, paper_id: &str) -> ClientResult<Vec<Paper>> {
        let url = format!("{}/paper/{}/references", self.graph_api_url, paper_id);
        self.neighbor_list(paper_id, &url, "citedPaper").await
    }

    /// Get the papers citing a paper.
    ///
    /// Same failure policy as [`Self::get_references`].
    ///
    /// # Errors
    ///
    /// Returns error only when a successful response cannot be parsed.
    pub async fn get_citations(&self, paper_id: &str) -> ClientResult<Vec<Paper>> {
        let url = format!("{}/paper/{}/citations", self.graph_api_url, paper_id);
        self.neighbor_list(paper_id, &url, "citingPaper").await
    }

    /// Fetch a citation/reference listing and extract the neighbor papers.
    async fn neighbor_list(
        &self,
        paper_id: &str,
        url: &str,
        wrapper: &str,
    ) -> ClientResult<Vec<Paper>> {
        let fields = format!("{wrapper}.{}", self.fields.join(&format!(",{wrapper}.")));
        let params = vec![("fields".to_string(), fields)];

        match self.get::<CitationResult>(url, &params).await {
            Ok(result) => Ok(result.into_papers()),
            Err(err @ ClientError::Parse(_)) => Err(err),
            Err(err) => {
                warn!(paper_id, error = %err, "neighbor lookup failed, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Make a GET request.
    async fn get<T>(&self, url: &str, params: &[(String, String)]) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        // Check cache
        let cache_key = self.cache_key("GET", url, params);
        if let Some(cached) = self.cache.get(&cache_key).await {
            return serde_json::from_value(cached).map_err(ClientError::from);
        }

        // Rate limit
        if let Some(ref limiter) = self.limiter {
            limiter.until_ready().await;
        }

        let response = self.client.get(url).query(params).send().await?;

        let response = self.handle_response(response).await?;
        let value: serde_json::Value = response.json().await?;

        // Cache response
        self.cache.insert(cache_key, value.clone()).await;

        serde_json::from_value(value).map_err(ClientError::from)
    }

    /// Handle API response status codes.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        match status.as_u16() {
            429 => {
                let retry_after = response
                    .headers()
                    .get("Retry-After")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(60);

                Err(ClientError::rate_limited(retry_after))
            }
            404 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::not_found(text))
            }
            400 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::bad_request(text))
            }
            500..=599 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::server(status.as_u16(), text))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text })
            }
        }
    }

    /// Generate cache key.
    fn cache_key(&self, method: &str, url: &str, params: &[(String, String)]) -> String {
        use md5::{Digest, Md5};

        let mut hasher = Md5::new();
        hasher.update(method.as_bytes());
        hasher.update(b"|");
        hasher.update(url.as_bytes());
        hasher.update(b"|");

        for (k, v) in params {
            hasher.update(k.as_bytes());
            hasher.update(b"=");
            hasher.update(v.as_bytes());
            hasher.update(b"&");
        }

        format!("{:x}", hasher.finalize())
    }
}

impl std::fmt::Debug for GraphClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphClient").field("has_api_key", &self.has_api_key()).finish()
    }
}
