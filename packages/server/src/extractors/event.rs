use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use common::EventId;
use serde::Deserialize;

use crate::error::AppError;

#[derive(Deserialize)]
struct EventParams {
    event: Option<String>,
}

/// Event selected through the `?event=` query parameter.
///
/// Absent or blank values resolve to the default event.
pub struct EventQuery(pub EventId);

impl<S> FromRequestParts<S> for EventQuery
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<EventParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;
        Ok(EventQuery(EventId::from(params.event)))
    }
}
