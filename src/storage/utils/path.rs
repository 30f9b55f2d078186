// Path helper utilities shared across storage operations
use std::path::Path;

/// Extract the final path segment of a local file path or object key.
pub fn basename(path: &str) -> String {
    Path::new(path.trim_end_matches('/'))
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.trim_matches('/').to_string())
}

/// Build the object key for an upload into a prefix:
/// `{prefix}/{basename(file_path)}`. A trailing '/' on the prefix is
/// dropped, and an empty prefix stores the bare base name.
pub fn prefixed_key(prefix: &str, file_path: &str) -> String {
    let name = basename(file_path);
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        name
    } else {
        format!("{prefix}/{name}")
    }
}
