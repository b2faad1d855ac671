use thiserror::Error;

/// Errors that can occur during media gateway operations.
#[derive(Debug, Error)]
pub enum MediaError {
    /// The upload carried no file content. Raised before any remote call.
    #[error("no file provided")]
    NoFileProvided,

    /// The media host rejected the upload or could not be reached.
    #[error("upload failed: {0}")]
    UploadFailed(String),

    /// Searching the media host failed.
    #[error("fetch failed: {0}")]
    FetchFailed(String),

    #[error("media gateway misconfigured: {0}")]
    Misconfigured(String),
}
