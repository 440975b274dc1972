//! Feed configuration.

use std::env;

use crate::error::{FeedError, Result};

/// Environment variable supplying the feed base URL.
pub const BASE_URL_ENV: &str = "GRAM_API_URL";

/// Configuration for the posts feed.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Base URL the `posts` path is appended to
    /// (e.g., "https://portal.example.com/api/")
    pub base_url: String,
}

impl FeedConfig {
    /// Create a config with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Read the base URL from the [`BASE_URL_ENV`] environment variable.
    pub fn from_env() -> Result<Self> {
        match env::var(BASE_URL_ENV) {
            Ok(url) => Ok(Self::new(url)),
            Err(_) => Err(FeedError::InvalidUrl(format!("{BASE_URL_ENV} is not set"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_url() {
        let config = FeedConfig::new("https://portal.example.com/api/");
        assert_eq!(config.base_url, "https://portal.example.com/api/");
    }
}
