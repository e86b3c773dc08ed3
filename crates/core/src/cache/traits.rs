use std::time::Duration;

use async_trait::async_trait;

use super::Result;

/// Key-value accelerator in front of the store.
///
/// Every operation is best-effort: the service treats any error here as a
/// miss/no-op and keeps serving from the store, so the cache is never the
/// sole source of truth.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Gets a value from the cache by key.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Sets a value in the cache with an optional TTL.
    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()>;

    /// Deletes a value from the cache by key.
    async fn delete(&self, key: &str) -> Result<()>;
}
