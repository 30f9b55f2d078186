use crate::error::{Error, Result};
use crate::storage::utils::error::classify;
use crate::storage::utils::path::basename;
use aws_sdk_s3::Client;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Trait for downloading objects from storage to the local filesystem.
pub trait Downloader {
    /// Download a single object to `local_path`.
    ///
    /// Missing parent directories of the destination are created
    /// before the file is written.
    ///
    /// # Arguments
    /// * `bucket` - Source bucket
    /// * `key` - Source object key
    /// * `local_path` - Destination path on the local filesystem
    ///
    /// # Returns
    /// * `Result<()>` - Success or detailed error information
    async fn download(&self, bucket: &str, key: &str, local_path: &str) -> Result<()>;
}

/// Implementation of Downloader for the S3 client.
pub struct S3Downloader {
    client: Client,
}

impl S3Downloader {
    /// Create a new downloader with the given S3 client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Downloader for S3Downloader {
    async fn download(&self, bucket: &str, key: &str, local_path: &str) -> Result<()> {
        let dest = resolve_destination(local_path, key);
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await?;
        }

        let output = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| classify(e, format!("{bucket}/{key}")))?;

        let data = output
            .body
            .collect()
            .await
            .map_err(|e| Error::BodyRead {
                message: e.to_string(),
            })?;
        fs::write(&dest, data.into_bytes()).await?;

        Ok(())
    }
}

/// A destination that is an existing directory (or written with a
/// trailing separator) receives the key's base name inside it.
fn resolve_destination(local_path: &str, key: &str) -> PathBuf {
    let path = Path::new(local_path);
    if local_path.ends_with('/') || path.is_dir() {
        path.join(basename(key))
    } else {
        path.to_path_buf()
    }
}
