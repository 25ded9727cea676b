pub mod traits;
pub mod sqlite;
pub mod cache_store;

pub use traits::KeyValueStore;
pub use sqlite::{SqliteStorage, SqliteKeyValueStore};
pub use cache_store::{CacheEntry, CacheStore, CACHE_KEY, FRESHNESS_WINDOW_SECS};
