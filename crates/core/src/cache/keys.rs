use crate::item::ItemId;

/// Returns the cache key for a single item.
///
/// The fixed `items:` prefix keeps the keys from colliding with unrelated
/// entries in a shared cache namespace.
pub fn item_key(id: ItemId) -> String {
    format!("items:{id}")
}
