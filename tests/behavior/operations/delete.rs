use crate::*;
use assert_cmd::prelude::*;
use bucketctl::error::Result;
use bucketctl::storage::StorageClient;
use predicates::prelude::*;
use uuid::Uuid;

pub fn tests(client: &StorageClient, tests: &mut Vec<Trial>) {
    tests.extend(async_trials!(
        client,
        test_delete_removes_object,
        test_delete_missing_key_completes
    ));

    tests.extend(async_trials!(client, e2e_test_delete_command_succeeds));
}

async fn test_delete_removes_object(client: StorageClient) -> Result<()> {
    let dir = tempfile::tempdir()?;
    let source = dir.path().join("doomed.bin");
    tokio::fs::write(&source, TEST_FIXTURE.new_content(100..1000)).await?;

    let bucket = test_bucket();
    let key = TEST_FIXTURE.new_key();
    client
        .upload(source.to_str().unwrap(), &bucket, &key)
        .await?;
    assert!(client.stat(&bucket, &key).await?.is_some());

    client.delete(&bucket, &key).await?;
    assert!(client.stat(&bucket, &key).await?.is_none());

    Ok(())
}

async fn test_delete_missing_key_completes(client: StorageClient) -> Result<()> {
    let bucket = test_bucket();
    let missing_key = Uuid::new_v4().to_string();

    // S3-compatible stores treat object deletion as idempotent.
    client.delete(&bucket, &missing_key).await?;

    Ok(())
}

async fn e2e_test_delete_command_succeeds(client: StorageClient) -> Result<()> {
    let dir = tempfile::tempdir()?;
    let source = dir.path().join("doomed.bin");
    tokio::fs::write(&source, TEST_FIXTURE.new_content(100..1000)).await?;

    let bucket = test_bucket();
    let key = TEST_FIXTURE.new_key();
    client
        .upload(source.to_str().unwrap(), &bucket, &key)
        .await?;

    bucketctl_cmd()
        .arg("--delete")
        .arg(&bucket)
        .arg(&key)
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted"));

    assert!(client.stat(&bucket, &key).await?.is_none());

    Ok(())
}
