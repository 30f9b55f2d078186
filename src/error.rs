use snafu::Snafu;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Setting '{key}' is required but was not found in the environment or config file"))]
    MissingSetting { key: String },

    #[snafu(display("Failed to read config file '{}': {source}", path.display()))]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Failed to parse config file '{}': {source}", path.display()))]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[snafu(display("Path does not exist: {}", path.display()))]
    PathNotFound { path: PathBuf },

    #[snafu(display("Not found: {resource}"))]
    NotFound { resource: String },

    #[snafu(display("Access denied: {resource}"))]
    AccessDenied { resource: String },

    #[snafu(display("Could not reach storage endpoint: {message}"))]
    Connection { message: String },

    #[snafu(display("Storage service error ({}): {message}", code.as_deref().unwrap_or("unknown")))]
    Service {
        code: Option<String>,
        message: String,
    },

    #[snafu(display("Failed to read object body: {message}"))]
    BodyRead { message: String },

    #[snafu(display("Failed to upload '{local_path}' to '{bucket}/{key}': {source}"))]
    UploadFailed {
        local_path: String,
        bucket: String,
        key: String,
        source: Box<Error>,
    },

    #[snafu(display("Failed to download '{bucket}/{key}' to '{local_path}': {source}"))]
    DownloadFailed {
        bucket: String,
        key: String,
        local_path: String,
        source: Box<Error>,
    },

    #[snafu(display("Failed to delete '{bucket}/{key}': {source}"))]
    DeleteFailed {
        bucket: String,
        key: String,
        source: Box<Error>,
    },

    #[snafu(display("Failed to list bucket '{bucket}': {source}"))]
    ListFailed { bucket: String, source: Box<Error> },

    #[snafu(display("Failed to list buckets: {source}"))]
    ListBucketsFailed { source: Box<Error> },

    #[snafu(display("Failed to create bucket '{bucket}': {source}"))]
    CreateBucketFailed { bucket: String, source: Box<Error> },

    #[snafu(display("Failed to check bucket '{bucket}': {source}"))]
    CheckBucketFailed { bucket: String, source: Box<Error> },

    #[snafu(display("Failed to stat '{bucket}/{key}': {source}"))]
    StatFailed {
        bucket: String,
        key: String,
        source: Box<Error>,
    },

    #[snafu(display("{failed} operation(s) failed"))]
    OperationsFailed { failed: usize },

    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io { source: error }
    }
}
