use crate::*;
use assert_cmd::prelude::*;
use bucketctl::error::Result;
use bucketctl::storage::StorageClient;
use predicates::prelude::*;
use uuid::Uuid;

pub fn tests(client: &StorageClient, tests: &mut Vec<Trial>) {
    tests.extend(async_trials!(
        client,
        test_stat_reports_size_and_timestamp,
        test_stat_missing_key_is_none,
        test_scalar_lookups_match_stat
    ));

    tests.extend(async_trials!(
        client,
        e2e_test_stat_command_prints_metadata,
        e2e_test_stat_missing_object_reports_absence
    ));
}

async fn upload_fixture_object(client: &StorageClient) -> Result<(String, String, usize)> {
    let dir = tempfile::tempdir()?;
    let content = TEST_FIXTURE.new_content(100..4096);
    let source = dir.path().join("meta.bin");
    tokio::fs::write(&source, &content).await?;

    let bucket = test_bucket();
    let key = TEST_FIXTURE.new_key();
    client
        .upload(source.to_str().unwrap(), &bucket, &key)
        .await?;

    Ok((bucket, key, content.len()))
}

async fn test_stat_reports_size_and_timestamp(client: StorageClient) -> Result<()> {
    let (bucket, key, size) = upload_fixture_object(&client).await?;

    let meta = client
        .stat(&bucket, &key)
        .await?
        .expect("uploaded object should exist");
    assert_eq!(meta.size, size as u64);
    assert!(meta.last_modified.is_some(), "service reports a timestamp");

    Ok(())
}

async fn test_stat_missing_key_is_none(client: StorageClient) -> Result<()> {
    let bucket = test_bucket();
    let missing_key = Uuid::new_v4().to_string();

    assert!(client.stat(&bucket, &missing_key).await?.is_none());
    assert!(client.content_length(&bucket, &missing_key).await?.is_none());
    assert!(client.last_modified(&bucket, &missing_key).await?.is_none());

    Ok(())
}

async fn test_scalar_lookups_match_stat(client: StorageClient) -> Result<()> {
    let (bucket, key, size) = upload_fixture_object(&client).await?;

    assert_eq!(
        client.content_length(&bucket, &key).await?,
        Some(size as u64)
    );
    let meta = client.stat(&bucket, &key).await?.expect("object exists");
    assert_eq!(client.last_modified(&bucket, &key).await?, meta.last_modified);

    Ok(())
}

async fn e2e_test_stat_command_prints_metadata(client: StorageClient) -> Result<()> {
    let (bucket, key, size) = upload_fixture_object(&client).await?;

    bucketctl_cmd()
        .arg("--stat")
        .arg(&bucket)
        .arg(&key)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("size: {size} bytes")))
        .stdout(predicate::str::contains("last-modified:"));

    Ok(())
}

async fn e2e_test_stat_missing_object_reports_absence(_client: StorageClient) -> Result<()> {
    let bucket = test_bucket();
    let missing_key = Uuid::new_v4().to_string();

    // Absence is an answer, so the invocation still succeeds.
    bucketctl_cmd()
        .arg("--stat")
        .arg(&bucket)
        .arg(&missing_key)
        .assert()
        .success()
        .stdout(predicate::str::contains("No such object"));

    Ok(())
}
