use async_trait::async_trait;

use crate::item::{Item, ItemId, ItemStatus};

use super::Result;

/// Durable repository for items; the authoritative source of truth.
///
/// The status filter is a first-class query so backends can push it into
/// the store instead of scanning the full table.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Gets an item by its identity.
    async fn get_item(&self, id: ItemId) -> Result<Option<Item>>;

    /// Lists items, optionally restricted to one status. Rows come back in
    /// whatever order the backend query yields.
    async fn list_items(&self, status: Option<ItemStatus>) -> Result<Vec<Item>>;

    /// Inserts a new item and returns it with the store-assigned identity.
    async fn insert_item(&self, item: &Item) -> Result<Item>;

    /// Updates an existing item; `NotFound` if the identity has no row.
    async fn update_item(&self, item: &Item) -> Result<()>;

    /// Deletes an item by its identity; `NotFound` if the identity has no row.
    async fn delete_item(&self, id: ItemId) -> Result<()>;
}
