//! Application state wiring.
//!
//! The shared state passed to every request handler holds one `ItemService`
//! over the storage and cache backends selected by feature flags. Both
//! gateways sit behind pooled connections shared across all concurrent
//! requests; nothing in the state is request-scoped.

use std::sync::Arc;

use crate::config::Config;
use crate::service::ItemService;

/// Shared application state, cloned per request handler.
#[derive(Clone)]
pub struct AppState {
    /// The item service orchestrating store and cache.
    pub items: Arc<ItemService>,
}

impl AppState {
    fn build(items: ItemService) -> Self {
        Self {
            items: Arc::new(items),
        }
    }
}

// ============================================================================
// Factory functions for different backend combinations
// ============================================================================

#[cfg(all(feature = "inmemory", feature = "memory"))]
mod inmemory_memory {
    use super::*;
    use crate::cache::memory::MemoryCache;
    use crate::storage::InMemoryItemRepository;

    impl AppState {
        /// Creates AppState with in-memory storage and cache.
        /// Useful for local development without any external dependencies.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repository = Arc::new(InMemoryItemRepository::new());
            let cache = Arc::new(MemoryCache::new(config.cache_max_entries));

            Ok(Self::build(ItemService::new(
                repository,
                cache,
                config.cache_ttl(),
            )))
        }
    }
}

#[cfg(all(feature = "sqlite", feature = "memory"))]
mod sqlite_memory {
    use super::*;
    use crate::cache::memory::MemoryCache;
    use crate::storage::SqliteItemRepository;

    impl AppState {
        /// Creates AppState with SQLite storage and in-memory cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repository = Arc::new(SqliteItemRepository::new(&config.sqlite_path).await?);
            let cache = Arc::new(MemoryCache::new(config.cache_max_entries));

            Ok(Self::build(ItemService::new(
                repository,
                cache,
                config.cache_ttl(),
            )))
        }
    }
}

#[cfg(all(feature = "sqlite", feature = "redis"))]
mod sqlite_redis {
    use super::*;
    use crate::cache::redis_impl::RedisCache;
    use crate::storage::SqliteItemRepository;

    impl AppState {
        /// Creates AppState with SQLite storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repository = Arc::new(SqliteItemRepository::new(&config.sqlite_path).await?);
            let cache = Arc::new(RedisCache::new(&config.redis_url).await?);

            Ok(Self::build(ItemService::new(
                repository,
                cache,
                config.cache_ttl(),
            )))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "redis"))]
mod inmemory_redis {
    use super::*;
    use crate::cache::redis_impl::RedisCache;
    use crate::storage::InMemoryItemRepository;

    impl AppState {
        /// Creates AppState with in-memory storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repository = Arc::new(InMemoryItemRepository::new());
            let cache = Arc::new(RedisCache::new(&config.redis_url).await?);

            Ok(Self::build(ItemService::new(
                repository,
                cache,
                config.cache_ttl(),
            )))
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================
