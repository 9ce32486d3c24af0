//! Resource fetcher abstraction.

use crate::domain::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Issues an authenticated GET for an API path and decodes the JSON body.
///
/// Implementations fail with [`ExplorerError::Transport`](crate::ExplorerError::Transport)
/// for non-2xx responses and [`ExplorerError::Decode`](crate::ExplorerError::Decode)
/// for bodies that are not JSON. There is no retry: a failed call propagates
/// immediately.
#[async_trait]
pub trait ResourceFetcher: Send + Sync {
    /// Fetches `path` (relative to the API base, including any query string).
    async fn get(&self, path: &str) -> Result<Value>;
}

#[async_trait]
impl<T: ResourceFetcher + ?Sized> ResourceFetcher for Box<T> {
    async fn get(&self, path: &str) -> Result<Value> {
        (**self).get(path).await
    }
}
