pub mod memory;
pub mod pool;
pub mod sqlite;

use async_trait::async_trait;

use crate::error::StorageResult;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Scoped string key-value storage. Only single-key reads and writes are
/// atomic; there are no transactions across keys.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Inserts or overwrites.
    async fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removing an absent key succeeds.
    async fn remove(&self, key: &str) -> StorageResult<()>;

    /// One pair per requested key, in request order. Absent keys map to `None`.
    async fn multi_get(&self, keys: &[String]) -> StorageResult<Vec<(String, Option<String>)>>;
}
