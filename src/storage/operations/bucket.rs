// Bucket-level operations: create, existence check, listing
use crate::error::Result;
use crate::storage::utils::error::classify;
use aws_sdk_s3::Client;

/// Outcome of a create-bucket call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateBucketOutcome {
    Created,
    /// The bucket was already there and is usable; not a failure.
    AlreadyExists,
}

/// Trait for bucket-level administration.
pub trait BucketOps {
    /// Create a bucket. "Already exists / already owned by you" is an
    /// informational outcome, distinct from a genuine failure.
    async fn create(&self, bucket: &str) -> Result<CreateBucketOutcome>;

    /// Check whether a bucket exists. A missing bucket is `Ok(false)`.
    async fn exists(&self, bucket: &str) -> Result<bool>;

    /// List the names of all buckets visible to the credentials.
    async fn list_buckets(&self) -> Result<Vec<String>>;
}

/// Implementation of BucketOps for the S3 client.
pub struct S3BucketOps {
    client: Client,
}

impl S3BucketOps {
    /// Create new bucket operations with the given S3 client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl BucketOps for S3BucketOps {
    async fn create(&self, bucket: &str) -> Result<CreateBucketOutcome> {
        match self.client.create_bucket().bucket(bucket).send().await {
            Ok(_) => Ok(CreateBucketOutcome::Created),
            Err(err)
                if err.as_service_error().is_some_and(|e| {
                    e.is_bucket_already_owned_by_you() || e.is_bucket_already_exists()
                }) =>
            {
                Ok(CreateBucketOutcome::AlreadyExists)
            }
            Err(err) => Err(classify(err, bucket)),
        }
    }

    async fn exists(&self, bucket: &str) -> Result<bool> {
        match self.client.head_bucket().bucket(bucket).send().await {
            Ok(_) => Ok(true),
            Err(err) if err.as_service_error().is_some_and(|e| e.is_not_found()) => Ok(false),
            Err(err) => Err(classify(err, bucket)),
        }
    }

    async fn list_buckets(&self) -> Result<Vec<String>> {
        let output = self
            .client
            .list_buckets()
            .send()
            .await
            .map_err(|e| classify(e, "buckets"))?;

        let names = output
            .buckets()
            .iter()
            .filter_map(|bucket| bucket.name())
            .map(str::to_string)
            .collect();
        Ok(names)
    }
}
