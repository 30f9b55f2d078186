// Connection defaults for S3-compatible endpoints
pub const DEFAULT_ENDPOINT: &str = "http://localhost:9000";
pub const DEFAULT_REGION: &str = "us-east-1";

// Environment variable naming an alternate config file location
pub const CONFIG_FILE_ENV: &str = "BUCKETCTL_CONFIG";
