use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::error::{AppError, ErrorBody, FETCH_BLESSINGS_FAILED, SAVE_BLESSING_FAILED};
use crate::extractors::json::AppJson;
use crate::models::blessing::CreateBlessingRequest;
use crate::state::AppState;
use crate::store::Blessing;

#[utoipa::path(
    post,
    path = "/api/blessings",
    tag = "Blessings",
    operation_id = "createBlessing",
    summary = "Leave a blessing",
    description = "Stores a named message. Both fields are required and trimmed; \
        the timestamp is assigned by the server.",
    request_body = CreateBlessingRequest,
    responses(
        (status = 201, description = "Blessing stored", body = Blessing),
        (status = 400, description = "Missing name or message", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn create_blessing(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateBlessingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (name, message) = payload.validate()?;

    let blessing = state
        .blessings
        .append(name, message)
        .await
        .map_err(|e| AppError::upstream(SAVE_BLESSING_FAILED, e))?;

    Ok((StatusCode::CREATED, Json(blessing)))
}

#[utoipa::path(
    get,
    path = "/api/blessings",
    tag = "Blessings",
    operation_id = "listBlessings",
    summary = "List all blessings",
    description = "Returns every blessing, newest first.",
    responses(
        (status = 200, description = "Blessings", body = [Blessing]),
        (status = 500, description = "Store failure", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn list_blessings(State(state): State<AppState>) -> Result<Json<Vec<Blessing>>, AppError> {
    let blessings = state
        .blessings
        .list_all()
        .await
        .map_err(|e| AppError::upstream(FETCH_BLESSINGS_FAILED, e))?;

    Ok(Json(blessings))
}
