use crate::error::Result;
use crate::storage::utils::error::classify;
use aws_sdk_s3::Client;

/// Object metadata as reported by a head-object call.
///
/// - `bucket` / `key`: The queried object (as provided by caller)
/// - `size`: Content length in bytes
/// - `last_modified`: RFC3339 string if available
/// - `etag`: Service provided entity tag if available
/// - `content_type`: MIME type if available
#[derive(Debug, Clone)]
pub struct ObjectMeta {
    pub bucket: String,
    pub key: String,
    pub size: u64,
    pub last_modified: Option<String>,
    pub etag: Option<String>,
    pub content_type: Option<String>,
}

/// Trait for fetching object metadata from storage.
pub trait Stater {
    /// Fetch metadata for a single object.
    ///
    /// A key that does not exist yields `Ok(None)`; any other failure
    /// is an error.
    async fn stat(&self, bucket: &str, key: &str) -> Result<Option<ObjectMeta>>;
}

/// Implementation of `Stater` for the S3 client.
#[derive(Clone)]
pub struct S3Stater {
    client: Client,
}

impl S3Stater {
    /// Create a new stater with the given S3 client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Stater for S3Stater {
    async fn stat(&self, bucket: &str, key: &str) -> Result<Option<ObjectMeta>> {
        let output = match self
            .client
            .head_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
        {
            Ok(output) => output,
            Err(err) if err.as_service_error().is_some_and(|e| e.is_not_found()) => {
                return Ok(None);
            }
            Err(err) => return Err(classify(err, format!("{bucket}/{key}"))),
        };

        Ok(Some(ObjectMeta {
            bucket: bucket.to_string(),
            key: key.to_string(),
            size: output.content_length().unwrap_or_default().max(0) as u64,
            last_modified: output.last_modified().map(|t| t.to_string()),
            etag: output.e_tag().map(str::to_string),
            content_type: output.content_type().map(str::to_string),
        }))
    }
}
