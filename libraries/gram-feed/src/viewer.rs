//! The posts viewer component.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::client::FeedClient;
use crate::types::Record;

/// Fetches the posts feed once and renders it as a list.
///
/// The viewer owns the record list for the duration of one mount cycle. On
/// a successful fetch the whole list is replaced; on any failure
/// (non-success status, connection error, unparseable body, cancellation)
/// the failure is logged and the list keeps its prior value, initially
/// empty. There is no user-visible error state and no automatic retry.
///
/// The in-flight fetch is bound to the viewer's lifetime: dropping the
/// viewer cancels it, so a late response can never write state after
/// teardown.
pub struct PostsViewer {
    client: FeedClient,
    records: Arc<RwLock<Vec<Record>>>,
    cancel: CancellationToken,
    mounted: AtomicBool,
}

impl PostsViewer {
    /// Create a viewer over the given client.
    pub fn new(client: FeedClient) -> Self {
        Self {
            client,
            records: Arc::new(RwLock::new(Vec::new())),
            cancel: CancellationToken::new(),
            mounted: AtomicBool::new(false),
        }
    }

    /// A handle for cancelling this viewer's fetch from elsewhere.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Load the feed.
    ///
    /// Fetches exactly once; calls after the first are no-ops regardless of
    /// whether that fetch succeeded, matching one fetch per mount.
    pub async fn mount(&self) {
        if self.mounted.swap(true, Ordering::SeqCst) {
            debug!("Viewer already mounted, skipping fetch");
            return;
        }

        match self.client.fetch_posts_cancellable(&self.cancel).await {
            Ok(records) => {
                info!(records = records.len(), "Feed loaded");
                *self.records.write().await = records;
            }
            Err(err) => {
                warn!(error = %err, "Error fetching the data");
            }
        }
    }

    /// The stored records, in feed order.
    pub async fn records(&self) -> Vec<Record> {
        self.records.read().await.clone()
    }

    /// One display line per record, in feed order.
    ///
    /// Items are keyed positionally; a reorder at the source is
    /// indistinguishable from a local one.
    pub async fn items(&self) -> Vec<String> {
        self.records
            .read()
            .await
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Whether nothing has been loaded (or the last load failed with no
    /// prior data).
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl Drop for PostsViewer {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
