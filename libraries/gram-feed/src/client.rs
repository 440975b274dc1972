//! HTTP client for the posts feed.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::config::FeedConfig;
use crate::error::{FeedError, Result};
use crate::types::Record;

/// Client for the portal's posts feed.
///
/// Issues plain unauthenticated GETs; the feed endpoint takes no query
/// parameters and offers no pagination.
pub struct FeedClient {
    http: Client,
    base_url: String,
}

impl FeedClient {
    /// Create a new client with the given configuration.
    pub fn new(config: FeedConfig) -> Result<Self> {
        // Validate URL
        if config.base_url.is_empty() {
            return Err(FeedError::InvalidUrl("URL cannot be empty".into()));
        }
        if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
            return Err(FeedError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        // Normalize to exactly one trailing slash; the request path is
        // appended with plain concatenation.
        let base_url = format!("{}/", config.base_url.trim_end_matches('/'));

        // Create HTTP client with reasonable defaults
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("GramPortal/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FeedError::Request)?;

        Ok(Self { http, base_url })
    }

    /// The normalized base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the current list of posts.
    ///
    /// One `GET {base}posts`; any non-success status is reported as
    /// [`FeedError::BadStatus`], a success body is parsed as a JSON array
    /// with no further schema validation.
    pub async fn fetch_posts(&self) -> Result<Vec<Record>> {
        let url = format!("{}posts", self.base_url);
        debug!(url = %url, "Fetching posts");

        let response = self
            .http
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    FeedError::Unreachable(e.to_string())
                } else {
                    FeedError::Request(e)
                }
            })?;

        let status = response.status();

        if status.is_success() {
            let records: Vec<Record> = response.json().await.map_err(|e| {
                FeedError::Parse(format!("Failed to parse posts response: {}", e))
            })?;

            debug!(records = records.len(), "Fetched posts");
            Ok(records)
        } else {
            Err(FeedError::BadStatus {
                status: status.as_u16(),
            })
        }
    }

    /// Fetch the posts, aborting early if `cancel` fires.
    ///
    /// On cancellation the request is dropped and [`FeedError::Cancelled`]
    /// is returned; no state is touched.
    pub async fn fetch_posts_cancellable(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<Record>> {
        tokio::select! {
            () = cancel.cancelled() => Err(FeedError::Cancelled),
            result = self.fetch_posts() => result,
        }
    }
}
