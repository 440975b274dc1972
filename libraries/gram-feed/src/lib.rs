//! Gram Portal Feed Client
//!
//! HTTP client and viewer for the portal's remote posts feed.
//!
//! # Features
//!
//! - **Client**: one `GET {base}posts` request returning schema-free JSON
//!   records
//! - **Viewer**: fetch exactly once per mount, render records in order,
//!   recover silently from network failure
//! - **Cancellation**: in-flight fetches are bound to the viewer's lifetime
//!
//! # Example
//!
//! ```ignore
//! use gram_feed::{FeedClient, FeedConfig, PostsViewer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = FeedConfig::from_env()?;
//!     let viewer = PostsViewer::new(FeedClient::new(config)?);
//!
//!     viewer.mount().await;
//!     for item in viewer.items().await {
//!         println!("{item}");
//!     }
//!
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
mod error;
mod types;
mod viewer;

// Re-export main types
pub use client::FeedClient;
pub use config::{FeedConfig, BASE_URL_ENV};
pub use error::{FeedError, Result};
pub use types::Record;
pub use viewer::PostsViewer;
