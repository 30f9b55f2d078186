use crate::error::Result;
use crate::storage::utils::error::classify;
use aws_sdk_s3::Client;

/// Trait for listing object keys in a bucket.
pub trait Lister {
    /// List object keys, optionally restricted to a key prefix.
    ///
    /// Keys come back in the order the service reports them. A bucket
    /// or prefix with no matching objects yields an empty vec; only a
    /// failed call is an error.
    ///
    /// # Arguments
    /// * `bucket` - Bucket to list
    /// * `prefix` - Optional key prefix filter
    ///
    /// # Returns
    /// * `Result<Vec<String>>` - Matching keys, or detailed error information
    async fn list(&self, bucket: &str, prefix: Option<&str>) -> Result<Vec<String>>;
}

/// Implementation of Lister for the S3 client.
pub struct S3Lister {
    client: Client,
}

impl S3Lister {
    /// Create a new lister with the given S3 client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Lister for S3Lister {
    async fn list(&self, bucket: &str, prefix: Option<&str>) -> Result<Vec<String>> {
        let mut request = self.client.list_objects_v2().bucket(bucket);
        if let Some(prefix) = prefix {
            request = request.prefix(prefix);
        }

        let output = request.send().await.map_err(|e| classify(e, bucket))?;

        let keys = output
            .contents()
            .iter()
            .filter_map(|object| object.key())
            .map(str::to_string)
            .collect();
        Ok(keys)
    }
}
