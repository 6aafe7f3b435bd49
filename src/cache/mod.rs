// Cache module for the persisted rating snapshot.
// Provides the key-value store abstraction and its file and memory backends.

pub mod paths;
pub mod snapshot;
pub mod store;

pub use paths::{cache_dir, resolve_store_path, store_path};
pub use snapshot::{LAST_UPDATED_KEY, RATING_COUNT_KEY, RatingSnapshot};
pub use store::{FileStore, KeyValueStore, MemoryStore};
