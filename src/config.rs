use serde::Deserialize;
use snafu::{OptionExt, ResultExt};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::error::{ConfigParseSnafu, ConfigReadSnafu, MissingSettingSnafu, Result};
use crate::storage::StorageConfig;
use crate::storage::constants::{CONFIG_FILE_ENV, DEFAULT_ENDPOINT, DEFAULT_REGION};

/// Optional JSON config file, used to seed settings the environment
/// does not supply.
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub endpoint_url: Option<String>,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    pub region: Option<String>,
}

/// Load storage configuration from environment variables, falling back
/// to the config file and built-in defaults.
pub fn load_storage_config() -> Result<StorageConfig> {
    let file = read_config_file()?.unwrap_or_default();

    let endpoint = resolve(
        env_var("STORAGE_ENDPOINT"),
        env_var("MINIO_ENDPOINT_URL"),
        file.endpoint_url,
    )
    .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let access_key_id = resolve(
        env_var("STORAGE_ACCESS_KEY_ID"),
        env_var("MINIO_ACCESS_KEY"),
        file.access_key,
    )
    .context(MissingSettingSnafu {
        key: "STORAGE_ACCESS_KEY_ID or MINIO_ACCESS_KEY",
    })?;

    let secret_access_key = resolve(
        env_var("STORAGE_ACCESS_KEY_SECRET"),
        env_var("MINIO_SECRET_KEY"),
        file.secret_key,
    )
    .context(MissingSettingSnafu {
        key: "STORAGE_ACCESS_KEY_SECRET or MINIO_SECRET_KEY",
    })?;

    let region = resolve(
        env_var("STORAGE_REGION"),
        env_var("MINIO_DEFAULT_REGION"),
        file.region,
    )
    .unwrap_or_else(|| DEFAULT_REGION.to_string());

    Ok(StorageConfig::new(
        endpoint,
        access_key_id,
        secret_access_key,
        region,
    ))
}

/// Pick the first available value: primary env var, secondary env var,
/// then config file.
fn resolve(
    primary: Option<String>,
    secondary: Option<String>,
    file_value: Option<String>,
) -> Option<String> {
    primary.or(secondary).or(file_value)
}

fn env_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.is_empty())
}

/// Config file location: `$BUCKETCTL_CONFIG` if set, otherwise
/// `~/.bucketctl/config.json`.
fn config_file_path() -> Option<PathBuf> {
    if let Some(path) = env_var(CONFIG_FILE_ENV) {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".bucketctl").join("config.json"))
}

fn read_config_file() -> Result<Option<FileConfig>> {
    let Some(path) = config_file_path() else {
        return Ok(None);
    };
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path).context(ConfigReadSnafu { path: path.clone() })?;
    let config = serde_json::from_str(&content).context(ConfigParseSnafu { path })?;
    Ok(Some(config))
}
