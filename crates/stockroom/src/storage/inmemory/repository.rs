//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use stockroom_core::item::{Item, ItemId, ItemStatus};
use stockroom_core::storage::{ItemRepository, RepositoryError, Result};

/// In-memory storage backend for testing and local development.
///
/// Uses a HashMap behind `Arc<RwLock<_>>` for thread-safe access and a
/// monotonically increasing counter for identity assignment. Data is lost
/// when the repository is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryItemRepository {
    items: Arc<RwLock<HashMap<ItemId, Item>>>,
    next_id: Arc<AtomicI64>,
}

impl Default for InMemoryItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryItemRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn get_item(&self, id: ItemId) -> Result<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.get(&id).cloned())
    }

    async fn list_items(&self, status: Option<ItemStatus>) -> Result<Vec<Item>> {
        let items = self.items.read().await;
        Ok(items
            .values()
            .filter(|item| status.is_none_or(|s| item.status == s))
            .cloned()
            .collect())
    }

    async fn insert_item(&self, item: &Item) -> Result<Item> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let persisted = item.clone().with_id(id);
        self.items.write().await.insert(id, persisted.clone());
        Ok(persisted)
    }

    async fn update_item(&self, item: &Item) -> Result<()> {
        let mut items = self.items.write().await;
        if !items.contains_key(&item.id) {
            return Err(RepositoryError::item_not_found(item.id));
        }
        items.insert(item.id, item.clone());
        Ok(())
    }

    async fn delete_item(&self, id: ItemId) -> Result<()> {
        let mut items = self.items.write().await;
        if items.remove(&id).is_none() {
            return Err(RepositoryError::item_not_found(id));
        }
        Ok(())
    }
}
