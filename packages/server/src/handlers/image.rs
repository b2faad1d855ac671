use axum::Json;
use axum::extract::multipart::Field;
use axum::extract::{DefaultBodyLimit, Path, State};
use common::EventId;
use common::media::{StoredImage, UploadRequest};
use tracing::instrument;

use crate::error::{AppError, ErrorBody, FETCH_IMAGES_FAILED, NO_FILE_UPLOADED};
use crate::extractors::event::EventQuery;
use crate::extractors::multipart::UploadForm;
use crate::models::image::ImageListResponse;
use crate::state::AppState;

/// Body limit for the upload route: the file limit plus room for multipart framing.
pub fn upload_body_limit(max_upload_size: u64) -> DefaultBodyLimit {
    let limit = usize::try_from(max_upload_size)
        .unwrap_or(usize::MAX)
        .saturating_add(64 * 1024);
    DefaultBodyLimit::max(limit)
}

#[utoipa::path(
    post,
    path = "/upload",
    tag = "Images",
    operation_id = "uploadImage",
    summary = "Upload an image into an event folder",
    description = "Stores the `file` multipart field under `wedding/private/<event>`. \
        The object's public id is the original filename up to its first `.`; \
        re-uploading the same name replaces the earlier image.",
    params(("event" = Option<String>, Query, description = "Event folder (default `Uncategorized`)")),
    request_body(content_type = "multipart/form-data", description = "Image in the `file` field"),
    responses(
        (status = 200, description = "Image stored", body = StoredImage),
        (status = 400, description = "No file uploaded or malformed form", body = ErrorBody),
        (status = 500, description = "Media host failure", body = ErrorBody),
    ),
)]
#[instrument(skip(state, multipart))]
pub async fn upload_image(
    State(state): State<AppState>,
    EventQuery(event): EventQuery,
    UploadForm(mut multipart): UploadForm,
) -> Result<Json<StoredImage>, AppError> {
    let max_size = state.config.media.max_upload_size;
    let mut upload: Option<UploadRequest> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Multipart error: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        // A `file` part without a filename is a plain text field, not an upload.
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };

        let content_type = field
            .content_type()
            .map(str::to_string)
            .or_else(|| mime_guess::from_path(&filename).first().map(|m| m.to_string()));
        let content = read_field(field, max_size).await?;

        upload = Some(UploadRequest {
            event: event.clone(),
            filename: Some(filename),
            content,
            content_type,
        });
    }

    let upload = upload.ok_or_else(|| AppError::Validation(NO_FILE_UPLOADED.into()))?;

    tracing::info!(folder = %event.folder(), "Uploading to event folder");
    let stored = state.media.store_image(upload).await?;

    Ok(Json(stored))
}

#[utoipa::path(
    get,
    path = "/images/{event}",
    tag = "Images",
    operation_id = "listImages",
    summary = "List an event's images",
    description = "Returns up to 30 image URLs from the event folder, newest first. \
        An event without images yields an empty list.",
    params(("event" = String, Path, description = "Event folder name")),
    responses(
        (status = 200, description = "Image URLs", body = ImageListResponse),
        (status = 500, description = "Media host failure", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn list_images(
    State(state): State<AppState>,
    Path(event): Path<String>,
) -> Result<Json<ImageListResponse>, AppError> {
    let event = EventId::from(event.as_str());
    let images = state
        .media
        .list_images(&event)
        .await
        .map_err(|e| AppError::upstream(FETCH_IMAGES_FAILED, e))?;

    Ok(Json(ImageListResponse { images }))
}

/// Buffer a multipart field, enforcing the size limit as chunks arrive.
async fn read_field(mut field: Field<'_>, max_size: u64) -> Result<Vec<u8>, AppError> {
    let mut content = Vec::new();

    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(|e| AppError::Validation(format!("Upload read error: {e}")))?
    {
        if (content.len() + chunk.len()) as u64 > max_size {
            return Err(AppError::Validation(format!(
                "File exceeds maximum size of {max_size} bytes"
            )));
        }
        content.extend_from_slice(&chunk);
    }

    Ok(content)
}
