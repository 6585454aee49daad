use std::time::Duration;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::io::AsyncRead;

pub mod driver;

/// Hard cap on the number of keys a single listing request will fetch.
pub const MAX_LISTING_KEYS: usize = 10_000;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("no such key: {0}")]
    NoSuchKey(String),

    #[error("storage operation timed out after {0:?}")]
    Timeout(Duration),

    #[error("storage backend error: {0}")]
    Backend(String),
}

/// A single entry in a bucket listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectEntry {
    pub key: String,
    pub size: u64,
    pub last_modified: Option<DateTime<Utc>>,
}

/// An open read stream for one object, positioned at its start.
pub struct ObjectRead {
    pub reader: Box<dyn AsyncRead + Send + Unpin>,
    pub size: Option<u64>,
    pub content_type: Option<String>,
}

#[async_trait::async_trait]
pub trait ObjectStore: Send + Sync {
    /// Enumerate up to `max_keys` entries under `prefix`, sorted ascending
    /// by key in case-sensitive byte order.
    async fn list(
        &self,
        prefix: &str,
        max_keys: usize,
    ) -> Result<Vec<ObjectEntry>, StorageError>;

    /// Open a read stream for `key`. The key is passed to the backend
    /// verbatim.
    async fn open_read(&self, key: &str) -> Result<ObjectRead, StorageError>;
}

/// Sort entries ascending by key byte order and drop everything past
/// `max_keys`.
pub fn sort_and_cap(mut entries: Vec<ObjectEntry>, max_keys: usize) -> Vec<ObjectEntry> {
    entries.sort_by(|a, b| a.key.cmp(&b.key));
    entries.truncate(max_keys);
    entries
}
