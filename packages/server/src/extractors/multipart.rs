use axum::extract::{FromRequest, Multipart, Request};

use crate::error::{AppError, NO_FILE_UPLOADED};

/// A `Multipart` wrapper for the upload route.
///
/// A body that is not `multipart/form-data` cannot carry a file, so the
/// rejection is reported as "No file uploaded" in the usual JSON shape.
pub struct UploadForm(pub Multipart);

impl<S> FromRequest<S> for UploadForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let multipart = Multipart::from_request(req, state).await.map_err(|e| {
            tracing::debug!("Upload body is not multipart: {}", e.body_text());
            AppError::Validation(NO_FILE_UPLOADED.into())
        })?;
        Ok(UploadForm(multipart))
    }
}
