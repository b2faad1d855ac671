use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::media::MediaError;
use serde::Serialize;

/// Error body returned by all endpoints on failure.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Human-readable error description.
    #[schema(example = "Name and message are required")]
    pub error: String,
}

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    /// Client-caused; always a 400.
    Validation(String),
    /// A media host or store failure. `message` is shown to the caller,
    /// `detail` is only logged.
    Upstream {
        message: &'static str,
        detail: String,
    },
}

impl AppError {
    pub fn upstream(message: &'static str, detail: impl ToString) -> Self {
        AppError::Upstream {
            message,
            detail: detail.to_string(),
        }
    }

    fn status_and_body(self) -> (StatusCode, ErrorBody) {
        match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, ErrorBody { error: msg }),
            AppError::Upstream { message, detail } => {
                tracing::error!("{message}: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: message.into(),
                    },
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}

pub const NO_FILE_UPLOADED: &str = "No file uploaded";
pub const UPLOAD_FAILED: &str = "Failed to upload image";
pub const FETCH_IMAGES_FAILED: &str = "Failed to fetch images";
pub const BLESSING_FIELDS_REQUIRED: &str = "Name and message are required";
pub const SAVE_BLESSING_FAILED: &str = "Failed to save blessing";
pub const FETCH_BLESSINGS_FAILED: &str = "Failed to fetch blessings";

impl From<MediaError> for AppError {
    fn from(err: MediaError) -> Self {
        match err {
            MediaError::NoFileProvided => AppError::Validation(NO_FILE_UPLOADED.into()),
            MediaError::FetchFailed(detail) => AppError::upstream(FETCH_IMAGES_FAILED, detail),
            other => AppError::upstream(UPLOAD_FAILED, other),
        }
    }
}
