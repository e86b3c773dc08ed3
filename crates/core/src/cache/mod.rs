mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::item_key;
pub use serialization::{
    deserialize_item, serialize_item, SerializationError, CACHE_SCHEMA_VERSION,
};
pub use traits::Cache;
