// Delete operation trait and implementation
use crate::error::Result;
use crate::storage::utils::error::classify;
use aws_sdk_s3::Client;

/// Trait for deleting objects from storage.
pub trait Deleter {
    /// Delete a single object.
    ///
    /// Deleting a key that does not exist completes successfully;
    /// S3-compatible services treat the operation as idempotent.
    ///
    /// # Arguments
    /// * `bucket` - Bucket holding the object
    /// * `key` - Object key to delete
    ///
    /// # Returns
    /// * `Result<()>` - Success or detailed error information
    async fn delete(&self, bucket: &str, key: &str) -> Result<()>;
}

/// Implementation of Deleter for the S3 client.
pub struct S3Deleter {
    client: Client,
}

impl S3Deleter {
    /// Create a new deleter with the given S3 client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Deleter for S3Deleter {
    async fn delete(&self, bucket: &str, key: &str) -> Result<()> {
        self.client
            .delete_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| classify(e, format!("{bucket}/{key}")))?;
        Ok(())
    }
}
