//! The item service: cache-aside orchestration over the store and cache.
//!
//! Reads go cache-first and fall back to the store, populating the cache on
//! the way out. Writes persist to the store first and only then touch the
//! cache (overwrite on update, evict-before-delete on removal). The store
//! is always authoritative; every cache failure degrades to a miss/no-op
//! and never changes the outcome of an operation.

mod items;

pub use items::ItemService;
