//! Serialization of cached item snapshots.
//!
//! Cached values use a fixed, schema-versioned JSON envelope. Only one
//! entity type is ever cached, so there is no type tagging; the version
//! field lets a deploy with a changed `Item` shape treat old entries as
//! misses instead of misreading them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::item::Item;

/// Version stamped into every cached envelope. Bump when the `Item` wire
/// shape changes incompatibly.
pub const CACHE_SCHEMA_VERSION: u32 = 1;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
    #[error("Unsupported cache schema version: {0}")]
    UnsupportedSchema(u32),
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

#[derive(Serialize, Deserialize)]
struct CachedItem {
    schema: u32,
    item: Item,
}

/// Serializes an item snapshot into the versioned envelope.
pub fn serialize_item(item: &Item) -> Result<Vec<u8>> {
    let envelope = CachedItem {
        schema: CACHE_SCHEMA_VERSION,
        item: item.clone(),
    };
    serde_json::to_vec(&envelope).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes a cached envelope back into an item.
///
/// A version mismatch is an error so callers treat the entry as a miss.
pub fn deserialize_item(bytes: &[u8]) -> Result<Item> {
    let envelope: CachedItem = serde_json::from_slice(bytes)
        .map_err(|e| SerializationError::DeserializeFailed(e.to_string()))?;
    if envelope.schema != CACHE_SCHEMA_VERSION {
        return Err(SerializationError::UnsupportedSchema(envelope.schema));
    }
    Ok(envelope.item)
}
