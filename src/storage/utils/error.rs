// Error conversion helpers and wrapping macro for Snafu-based errors
use aws_sdk_s3::error::{ProvideErrorMetadata, SdkError};

use crate::error::Error;

/// Map an SDK failure onto the crate's narrow error taxonomy.
///
/// Classification keys on the service-reported error code first
/// (not-found and access-denied are distinct outcomes callers react
/// to), then on the transport-level failure kind. Everything else is a
/// generic service error carrying the original code and message.
pub(crate) fn classify<E>(err: SdkError<E>, resource: impl Into<String>) -> Error
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
{
    let resource = resource.into();
    let code = err.code().map(str::to_string);
    let message = err.message().map(str::to_string);

    match code.as_deref() {
        Some("NoSuchKey" | "NoSuchBucket" | "NotFound") => Error::NotFound { resource },
        Some("AccessDenied" | "InvalidAccessKeyId" | "SignatureDoesNotMatch") => {
            Error::AccessDenied { resource }
        }
        _ => match &err {
            SdkError::TimeoutError(_) => Error::Connection {
                message: format!("request for '{resource}' timed out"),
            },
            SdkError::DispatchFailure(failure) => Error::Connection {
                message: failure
                    .as_connector_error()
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| format!("failed to dispatch request for '{resource}'")),
            },
            _ => Error::Service {
                code,
                message: message.unwrap_or_else(|| err.to_string()),
            },
        },
    }
}

/// Convert different error types into our unified Error type.
pub trait IntoBucketctlError {
    fn into_error(self) -> Error;
}

impl IntoBucketctlError for Error {
    fn into_error(self) -> Error {
        self
    }
}

impl IntoBucketctlError for std::io::Error {
    fn into_error(self) -> Error {
        self.into()
    }
}

/// Macro to wrap a Result-producing expression into a Snafu variant with `source: Box<Error>`.
/// Example:
/// wrap_err!(op.await, DownloadFailed { bucket: b, key: k, local_path: lp })
#[macro_export]
macro_rules! wrap_err {
    ($expr:expr, $variant:ident { $($field:ident : $value:expr),* $(,)? }) => {{
        $expr.map_err(|e| {
            let src: $crate::error::Error = $crate::storage::utils::error::IntoBucketctlError::into_error(e);
            $crate::error::Error::$variant { $($field: $value),*, source: Box::new(src) }
        })
    }};
}
