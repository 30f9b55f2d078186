use crate::error::{PathNotFoundSnafu, Result};
use crate::storage::utils::error::classify;
use aws_sdk_s3::Client;
use aws_sdk_s3::primitives::ByteStream;
use snafu::ensure;
use std::path::Path;
use tokio::fs;

/// Trait for uploading local files to object storage.
pub trait Uploader {
    /// Upload a single local file to `bucket` under `key`.
    ///
    /// # Arguments
    /// * `local_path` - Source file on the local filesystem
    /// * `bucket` - Destination bucket
    /// * `key` - Destination object key
    ///
    /// # Returns
    /// * `Result<()>` - Success or detailed error information
    async fn upload(&self, local_path: &str, bucket: &str, key: &str) -> Result<()>;
}

/// Implementation of Uploader for the S3 client.
pub struct S3Uploader {
    client: Client,
}

impl S3Uploader {
    /// Create a new uploader with the given S3 client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Uploader for S3Uploader {
    async fn upload(&self, local_path: &str, bucket: &str, key: &str) -> Result<()> {
        let path = Path::new(local_path);
        ensure!(
            path.exists(),
            PathNotFoundSnafu {
                path: path.to_path_buf()
            }
        );

        let body = fs::read(path).await?;
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| classify(e, format!("{bucket}/{key}")))?;

        Ok(())
    }
}
