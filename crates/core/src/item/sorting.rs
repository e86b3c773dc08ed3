use std::cmp::Ordering;

use super::types::Item;

/// Listing order: status rank first (CURRENT before DISCONTINUED), then
/// creation time ascending. Store queries return rows unordered; callers
/// that need the catalog order apply this comparator.
pub fn status_created_order(a: &Item, b: &Item) -> Ordering {
    a.status
        .sort_rank()
        .cmp(&b.status.sort_rank())
        .then_with(|| a.created_at.cmp(&b.created_at))
}

/// Sorts items in place into the catalog listing order.
pub fn sort_items(items: &mut [Item]) {
    items.sort_by(status_created_order);
}
