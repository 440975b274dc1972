//! Types for the posts feed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One item from the posts feed.
///
/// The endpoint promises nothing about record shape, so this wraps the raw
/// JSON value. `Display` renders the compact JSON text, which is exactly
/// what the viewer shows per list item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(
    /// The raw record value
    pub serde_json::Value,
);

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(&self.0).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
