use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use stockroom_core::cache::{deserialize_item, item_key, serialize_item, Cache};
use stockroom_core::item::{
    apply_draft, apply_status, create_item, Item, ItemDraft, ItemId, ItemStatus,
};
use stockroom_core::storage::{ItemRepository, RepositoryError, Result};

/// Cache-aside service for items.
///
/// Stateless orchestrator over the two gateways: it holds no per-identity
/// locks and no mutable state of its own, so any number of requests may be
/// in flight concurrently. The only ordering contracts are store-write
/// before cache-write on updates, and cache-evict before store-delete on
/// removals.
pub struct ItemService {
    repository: Arc<dyn ItemRepository>,
    cache: Arc<dyn Cache>,
    ttl: Duration,
}

impl ItemService {
    /// Creates a new item service.
    ///
    /// # Arguments
    ///
    /// * `repository` - The durable store; authoritative source of truth
    /// * `cache` - The volatile accelerator; best-effort, always disposable
    /// * `ttl` - Time-to-live applied on every cache population
    pub fn new(repository: Arc<dyn ItemRepository>, cache: Arc<dyn Cache>, ttl: Duration) -> Self {
        Self {
            repository,
            cache,
            ttl,
        }
    }

    /// Gets an item by identity, cache-first.
    ///
    /// A cache hit short-circuits the store entirely. On a miss (including
    /// a cache error or an undecodable entry) the store is consulted and
    /// the cache populated best-effort before returning.
    pub async fn get(&self, id: ItemId) -> Result<Item> {
        let cache_key = item_key(id);

        if let Ok(Some(bytes)) = self.cache.get(&cache_key).await {
            match deserialize_item(&bytes) {
                Ok(item) => {
                    tracing::trace!(item_id = id, "Cache hit for item");
                    return Ok(item);
                }
                // Undecodable entry - treat as a miss
                Err(err) => {
                    tracing::warn!(item_id = id, error = %err, "Cached item failed to decode");
                }
            }
        }

        tracing::trace!(item_id = id, "Cache miss for item");
        let item = self
            .repository
            .get_item(id)
            .await?
            .ok_or_else(|| RepositoryError::item_not_found(id))?;

        self.populate(&item).await;

        Ok(item)
    }

    /// Lists items, optionally filtered by status.
    ///
    /// Listing always bypasses the cache and reads the store directly; the
    /// rows come back in store order and callers apply the catalog
    /// comparator when they need it.
    pub async fn list(&self, status: Option<ItemStatus>) -> Result<Vec<Item>> {
        self.repository.list_items(status).await
    }

    /// Creates a new item from a draft.
    ///
    /// The store assigns the identity. The cache is left untouched; the
    /// first subsequent `get` populates it.
    pub async fn create(&self, draft: &ItemDraft) -> Result<Item> {
        let item = create_item(draft, Utc::now());
        let persisted = self.repository.insert_item(&item).await?;

        tracing::debug!(item_id = persisted.id, name = %persisted.name, "Item created");
        Ok(persisted)
    }

    /// Replaces an item's fields from a draft.
    ///
    /// Fails with `NotFound` if the identity has no record. The cache entry
    /// is overwritten with the new value strictly after the store write
    /// commits, so a concurrent read never sees a cached value newer than
    /// the store.
    pub async fn update(&self, id: ItemId, draft: &ItemDraft) -> Result<Item> {
        let current = self
            .repository
            .get_item(id)
            .await?
            .ok_or_else(|| RepositoryError::item_not_found(id))?;

        let updated = apply_draft(&current, draft, Utc::now());
        self.repository.update_item(&updated).await?;

        self.populate(&updated).await;

        tracing::debug!(item_id = id, "Item updated");
        Ok(updated)
    }

    /// Changes only an item's status, with the same store-then-cache
    /// ordering as `update`.
    pub async fn update_status(&self, id: ItemId, status: ItemStatus) -> Result<Item> {
        let current = self
            .repository
            .get_item(id)
            .await?
            .ok_or_else(|| RepositoryError::item_not_found(id))?;

        let updated = apply_status(&current, status, Utc::now());
        self.repository.update_item(&updated).await?;

        self.populate(&updated).await;

        tracing::debug!(item_id = id, status = %status, "Item status updated");
        Ok(updated)
    }

    /// Deletes an item by identity.
    ///
    /// The cache entry is evicted before the store delete is issued: if the
    /// delete then fails, the cache is merely empty and the next read
    /// re-fetches from the store, which favors a miss over a stale hit.
    pub async fn delete(&self, id: ItemId) -> Result<()> {
        let item = self
            .repository
            .get_item(id)
            .await?
            .ok_or_else(|| RepositoryError::item_not_found(id))?;

        let cache_key = item_key(item.id);
        if let Err(err) = self.cache.delete(&cache_key).await {
            tracing::warn!(item_id = id, error = %err, "Failed to evict item from cache");
        }

        self.repository.delete_item(id).await?;

        tracing::debug!(item_id = id, "Item deleted");
        Ok(())
    }

    /// Best-effort cache population; failures only cost the next read a
    /// store round-trip.
    async fn populate(&self, item: &Item) {
        let cache_key = item_key(item.id);
        match serialize_item(item) {
            Ok(bytes) => {
                if let Err(err) = self.cache.set(&cache_key, &bytes, Some(self.ttl)).await {
                    tracing::warn!(item_id = item.id, error = %err, "Failed to cache item");
                }
            }
            Err(err) => {
                tracing::warn!(item_id = item.id, error = %err, "Failed to serialize item for cache");
            }
        }
    }
}
