use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{Builder as S3ConfigBuilder, Credentials, Region};

use crate::error::{Error, Result};
use crate::wrap_err;

pub mod constants;
mod operations;
mod utils;

use self::operations::bucket::S3BucketOps;
use self::operations::delete::S3Deleter;
use self::operations::download::S3Downloader;
use self::operations::list::S3Lister;
use self::operations::stat::S3Stater;
use self::operations::upload::S3Uploader;
use self::operations::{BucketOps, Deleter, Downloader, Lister, Stater, Uploader};
use self::utils::path::prefixed_key;

pub use self::operations::bucket::CreateBucketOutcome;
pub use self::operations::stat::ObjectMeta;

/// Connection settings for an S3-compatible endpoint.
///
/// Built once (from the environment or a config file) and handed to
/// [`StorageClient::new`]; the client never reads ambient state itself.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub endpoint: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub region: String,
}

impl StorageConfig {
    pub fn new(
        endpoint: String,
        access_key_id: String,
        secret_access_key: String,
        region: String,
    ) -> Self {
        Self {
            endpoint,
            access_key_id,
            secret_access_key,
            region,
        }
    }
}

/// Client for a single S3-compatible endpoint, bucket-scoped per call.
#[derive(Clone)]
pub struct StorageClient {
    client: Client,
    endpoint: String,
}

impl StorageClient {
    pub async fn new(config: StorageConfig) -> Self {
        let client = Self::build_client(&config).await;
        Self {
            client,
            endpoint: config.endpoint,
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    async fn build_client(config: &StorageConfig) -> Client {
        let credentials = Credentials::new(
            config.access_key_id.as_str(),
            config.secret_access_key.as_str(),
            None,
            None,
            "static-credentials",
        );
        let shared = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .load()
            .await;

        // MinIO serves buckets under the path, not a subdomain.
        let s3_config = S3ConfigBuilder::from(&shared)
            .endpoint_url(config.endpoint.as_str())
            .force_path_style(true)
            .build();
        Client::from_conf(s3_config)
    }

    pub async fn upload(&self, local_path: &str, bucket: &str, key: &str) -> Result<()> {
        log::debug!("upload local_path={local_path} bucket={bucket} key={key}");
        let uploader = S3Uploader::new(self.client.clone());
        wrap_err!(
            uploader.upload(local_path, bucket, key).await,
            UploadFailed {
                local_path: local_path.to_string(),
                bucket: bucket.to_string(),
                key: key.to_string()
            }
        )
    }

    /// Upload a file under `{prefix}/{file name}` and return the key
    /// the object was stored as.
    pub async fn upload_to_prefix(
        &self,
        local_path: &str,
        bucket: &str,
        prefix: &str,
    ) -> Result<String> {
        log::debug!("upload_to_prefix local_path={local_path} bucket={bucket} prefix={prefix}");
        let key = prefixed_key(prefix, local_path);
        self.upload(local_path, bucket, &key).await?;
        Ok(key)
    }

    pub async fn download(&self, bucket: &str, key: &str, local_path: &str) -> Result<()> {
        log::debug!("download bucket={bucket} key={key} local_path={local_path}");
        let downloader = S3Downloader::new(self.client.clone());
        wrap_err!(
            downloader.download(bucket, key, local_path).await,
            DownloadFailed {
                bucket: bucket.to_string(),
                key: key.to_string(),
                local_path: local_path.to_string()
            }
        )
    }

    pub async fn delete(&self, bucket: &str, key: &str) -> Result<()> {
        log::debug!("delete bucket={bucket} key={key}");
        let deleter = S3Deleter::new(self.client.clone());
        wrap_err!(
            deleter.delete(bucket, key).await,
            DeleteFailed {
                bucket: bucket.to_string(),
                key: key.to_string()
            }
        )
    }

    /// List every object key in a bucket, in the order the service
    /// reports them. An empty bucket is an empty result, not an error.
    pub async fn list(&self, bucket: &str) -> Result<Vec<String>> {
        log::debug!("list bucket={bucket}");
        let lister = S3Lister::new(self.client.clone());
        wrap_err!(
            lister.list(bucket, None).await,
            ListFailed {
                bucket: bucket.to_string()
            }
        )
    }

    pub async fn list_with_prefix(&self, bucket: &str, prefix: &str) -> Result<Vec<String>> {
        log::debug!("list_with_prefix bucket={bucket} prefix={prefix}");
        let lister = S3Lister::new(self.client.clone());
        wrap_err!(
            lister.list(bucket, Some(prefix)).await,
            ListFailed {
                bucket: bucket.to_string()
            }
        )
    }

    /// Fetch object metadata. A missing key is `Ok(None)`, not an error.
    pub async fn stat(&self, bucket: &str, key: &str) -> Result<Option<ObjectMeta>> {
        log::debug!("stat bucket={bucket} key={key}");
        let stater = S3Stater::new(self.client.clone());
        wrap_err!(
            stater.stat(bucket, key).await,
            StatFailed {
                bucket: bucket.to_string(),
                key: key.to_string()
            }
        )
    }

    pub async fn content_length(&self, bucket: &str, key: &str) -> Result<Option<u64>> {
        Ok(self.stat(bucket, key).await?.map(|meta| meta.size))
    }

    pub async fn last_modified(&self, bucket: &str, key: &str) -> Result<Option<String>> {
        Ok(self
            .stat(bucket, key)
            .await?
            .and_then(|meta| meta.last_modified))
    }

    /// Create a bucket. A bucket that already exists and is usable is
    /// reported as [`CreateBucketOutcome::AlreadyExists`], not a failure.
    pub async fn create_bucket(&self, bucket: &str) -> Result<CreateBucketOutcome> {
        log::debug!("create_bucket bucket={bucket}");
        let ops = S3BucketOps::new(self.client.clone());
        wrap_err!(
            ops.create(bucket).await,
            CreateBucketFailed {
                bucket: bucket.to_string()
            }
        )
    }

    pub async fn bucket_exists(&self, bucket: &str) -> Result<bool> {
        log::debug!("bucket_exists bucket={bucket}");
        let ops = S3BucketOps::new(self.client.clone());
        wrap_err!(
            ops.exists(bucket).await,
            CheckBucketFailed {
                bucket: bucket.to_string()
            }
        )
    }

    pub async fn list_buckets(&self) -> Result<Vec<String>> {
        log::debug!("list_buckets");
        let ops = S3BucketOps::new(self.client.clone());
        ops.list_buckets()
            .await
            .map_err(|e| Error::ListBucketsFailed {
                source: Box::new(e),
            })
    }

    /// Diagnostic probe: one list-buckets round-trip. Returns the
    /// number of buckets visible to the configured credentials.
    pub async fn check_connection(&self) -> Result<usize> {
        log::debug!("check_connection endpoint={}", self.endpoint);
        let buckets = self.list_buckets().await?;
        Ok(buckets.len())
    }
}
