use async_trait::async_trait;

use crate::error::StorageResult;

/// Object storage interface trait
#[async_trait]
pub trait StorageInterface: Send + Sync {
    /// Read a whole object into memory
    async fn read(&self, bucket: &str, key: &str) -> StorageResult<Vec<u8>>;

    /// Write an object, overwriting any existing object at `key`.
    /// Returns the written key.
    async fn write(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> StorageResult<String>;
}
