use clap::Parser;
use snafu::ensure;

use crate::error::{OperationsFailedSnafu, Result};
use crate::storage::{CreateBucketOutcome, StorageClient};

/// Command-line surface. Each flag maps to one storage operation;
/// flags combine freely in a single invocation.
#[derive(Parser, Debug)]
#[command(
    name = "bucketctl",
    version,
    about = "Manage buckets and objects on MinIO and other S3-compatible stores"
)]
pub struct Args {
    /// Upload a local file to a bucket under the given key
    #[arg(long, num_args = 3, value_names = ["FILE_PATH", "BUCKET", "KEY"])]
    pub upload: Option<Vec<String>>,

    /// Download an object to a local path
    #[arg(long, num_args = 3, value_names = ["BUCKET", "KEY", "LOCAL_PATH"])]
    pub download: Option<Vec<String>>,

    /// Delete an object
    #[arg(long, num_args = 2, value_names = ["BUCKET", "KEY"])]
    pub delete: Option<Vec<String>>,

    /// List all objects in a bucket
    #[arg(long, value_name = "BUCKET")]
    pub list: Option<String>,

    /// List all buckets visible to the configured credentials
    #[arg(long)]
    pub list_buckets: bool,

    /// Create a bucket (a bucket you already own is not an error)
    #[arg(long, value_name = "BUCKET")]
    pub create_bucket: Option<String>,

    /// Check whether a bucket exists
    #[arg(long, value_name = "BUCKET")]
    pub check_bucket: Option<String>,

    /// Upload a local file under `{prefix}/{file name}`
    #[arg(long, num_args = 3, value_names = ["FILE_PATH", "BUCKET", "PREFIX"])]
    pub upload_prefix: Option<Vec<String>>,

    /// List objects in a bucket under a key prefix
    #[arg(long, num_args = 2, value_names = ["BUCKET", "PREFIX"])]
    pub list_prefix: Option<Vec<String>>,

    /// Print object metadata (size, last-modified, etag, content type)
    #[arg(long, num_args = 2, value_names = ["BUCKET", "KEY"])]
    pub stat: Option<Vec<String>>,
}

/// Execute every requested operation in a fixed order.
///
/// Operations are independent: a failure is reported on stderr and the
/// remaining operations still run. The error returned at the end only
/// carries the failure count for the exit code.
pub async fn run(args: Args, client: StorageClient) -> Result<()> {
    let mut failed = 0usize;

    if let Some([file_path, bucket, key]) = args.upload.as_deref() {
        match client.upload(file_path, bucket, key).await {
            Ok(()) => println!("Uploaded: {file_path} → {bucket}/{key}"),
            Err(e) => {
                eprintln!("Upload failed: {e}");
                failed += 1;
            }
        }
    }

    if let Some([bucket, key, local_path]) = args.download.as_deref() {
        match client.download(bucket, key, local_path).await {
            Ok(()) => println!("Downloaded: {bucket}/{key} → {local_path}"),
            Err(e) => {
                eprintln!("Download failed: {e}");
                failed += 1;
            }
        }
    }

    if let Some([bucket, key]) = args.delete.as_deref() {
        match client.delete(bucket, key).await {
            Ok(()) => println!("Deleted: {bucket}/{key}"),
            Err(e) => {
                eprintln!("Delete failed: {e}");
                failed += 1;
            }
        }
    }

    if let Some(bucket) = args.list.as_deref() {
        match client.list(bucket).await {
            Ok(keys) => {
                for key in keys {
                    println!("{key}");
                }
            }
            Err(e) => {
                eprintln!("List failed: {e}");
                failed += 1;
            }
        }
    }

    if args.list_buckets {
        match client.list_buckets().await {
            Ok(buckets) => {
                for bucket in buckets {
                    println!("{bucket}");
                }
            }
            Err(e) => {
                eprintln!("List buckets failed: {e}");
                failed += 1;
            }
        }
    }

    if let Some(bucket) = args.create_bucket.as_deref() {
        match client.create_bucket(bucket).await {
            Ok(CreateBucketOutcome::Created) => println!("Created bucket: {bucket}"),
            Ok(CreateBucketOutcome::AlreadyExists) => {
                println!("Bucket already exists: {bucket}")
            }
            Err(e) => {
                eprintln!("Create bucket failed: {e}");
                failed += 1;
            }
        }
    }

    if let Some(bucket) = args.check_bucket.as_deref() {
        match client.bucket_exists(bucket).await {
            Ok(true) => println!("Bucket '{bucket}' exists"),
            Ok(false) => println!("Bucket '{bucket}' does not exist"),
            Err(e) => {
                eprintln!("Check bucket failed: {e}");
                failed += 1;
            }
        }
    }

    if let Some([file_path, bucket, prefix]) = args.upload_prefix.as_deref() {
        match client.upload_to_prefix(file_path, bucket, prefix).await {
            Ok(key) => println!("Uploaded: {file_path} → {bucket}/{key}"),
            Err(e) => {
                eprintln!("Upload to prefix failed: {e}");
                failed += 1;
            }
        }
    }

    if let Some([bucket, prefix]) = args.list_prefix.as_deref() {
        match client.list_with_prefix(bucket, prefix).await {
            Ok(keys) => {
                for key in keys {
                    println!("{key}");
                }
            }
            Err(e) => {
                eprintln!("List prefix failed: {e}");
                failed += 1;
            }
        }
    }

    if let Some([bucket, key]) = args.stat.as_deref() {
        match client.stat(bucket, key).await {
            Ok(Some(meta)) => {
                println!("{bucket}/{key}");
                println!("  size: {} bytes", meta.size);
                if let Some(modified) = &meta.last_modified {
                    println!("  last-modified: {modified}");
                }
                if let Some(etag) = &meta.etag {
                    println!("  etag: {etag}");
                }
                if let Some(content_type) = &meta.content_type {
                    println!("  content-type: {content_type}");
                }
            }
            // Absence is an answer, not a failure.
            Ok(None) => println!("No such object: {bucket}/{key}"),
            Err(e) => {
                eprintln!("Stat failed: {e}");
                failed += 1;
            }
        }
    }

    ensure!(failed == 0, OperationsFailedSnafu { failed });
    Ok(())
}
