use crate::*;
use assert_cmd::prelude::*;
use bucketctl::error::Result;
use bucketctl::storage::StorageClient;
use predicates::prelude::*;
use uuid::Uuid;

pub fn tests(client: &StorageClient, tests: &mut Vec<Trial>) {
    tests.extend(async_trials!(
        client,
        test_list_empty_bucket_is_empty,
        test_list_returns_uploaded_keys,
        test_list_prefix_filters_keys,
        test_list_missing_bucket_is_error
    ));

    tests.extend(async_trials!(client, e2e_test_list_command_prints_keys));
}

async fn seed_keys(client: &StorageClient, prefix: &str, count: usize) -> Result<Vec<String>> {
    let dir = tempfile::tempdir()?;
    let source = dir.path().join("seed.bin");
    tokio::fs::write(&source, TEST_FIXTURE.new_content(100..1000)).await?;

    let bucket = test_bucket();
    let mut keys = Vec::new();
    for _ in 0..count {
        let key = TEST_FIXTURE.new_key_under(prefix);
        client
            .upload(source.to_str().unwrap(), &bucket, &key)
            .await?;
        keys.push(key);
    }
    Ok(keys)
}

async fn test_list_empty_bucket_is_empty(client: StorageClient) -> Result<()> {
    let bucket = TEST_FIXTURE.new_bucket();
    client.create_bucket(&bucket).await?;

    let keys = client.list(&bucket).await?;
    assert!(keys.is_empty(), "empty bucket should list nothing: {keys:?}");

    Ok(())
}

async fn test_list_returns_uploaded_keys(client: StorageClient) -> Result<()> {
    let prefix = format!("listed-{}", Uuid::new_v4());
    let expected = seed_keys(&client, &prefix, 3).await?;

    let keys = client.list(&test_bucket()).await?;
    for key in &expected {
        assert!(keys.contains(key), "listing should include {key}");
    }

    Ok(())
}

async fn test_list_prefix_filters_keys(client: StorageClient) -> Result<()> {
    let wanted_prefix = format!("wanted-{}", Uuid::new_v4());
    let other_prefix = format!("other-{}", Uuid::new_v4());
    let wanted = seed_keys(&client, &wanted_prefix, 2).await?;
    let other = seed_keys(&client, &other_prefix, 2).await?;

    let keys = client
        .list_with_prefix(&test_bucket(), &wanted_prefix)
        .await?;

    for key in &wanted {
        assert!(keys.contains(key), "prefix listing should include {key}");
    }
    for key in &other {
        assert!(!keys.contains(key), "prefix listing should exclude {key}");
    }

    Ok(())
}

async fn test_list_missing_bucket_is_error(client: StorageClient) -> Result<()> {
    let missing_bucket = format!("bucketctl-{}", Uuid::new_v4());

    // A failed call is an error, never an empty listing.
    let result = client.list(&missing_bucket).await;
    assert!(result.is_err(), "listing a missing bucket must fail");

    Ok(())
}

async fn e2e_test_list_command_prints_keys(client: StorageClient) -> Result<()> {
    let prefix = format!("cli-{}", Uuid::new_v4());
    let expected = seed_keys(&client, &prefix, 2).await?;

    let mut cmd = bucketctl_cmd();
    cmd.arg("--list").arg(test_bucket());
    let mut assert = cmd.assert().success();
    for key in &expected {
        assert = assert.stdout(predicate::str::contains(key.as_str()));
    }

    Ok(())
}
