use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, RawQuery, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::CreatedResponse;
use crate::state::AppState;
use crate::store::StoreError;

/// POST /api/resume
///
/// The body is read as raw bytes so that an unreadable or unparseable
/// document is reported the same way as any other save failure.
pub async fn handle_create_resume(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let body = body?;
    let document: Value =
        serde_json::from_slice(&body).map_err(|e| AppError::Save(StoreError::Json(e)))?;

    let id = state.store.insert(document).await.map_err(AppError::Save)?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// GET /api/resume?id=<uuid>
pub async fn handle_get_resume(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<Value>, AppError> {
    let raw = query
        .as_deref()
        .and_then(first_id_param)
        .filter(|id| !id.is_empty())
        .ok_or(AppError::MissingId)?;
    let id = Uuid::parse_str(&raw).map_err(|_| AppError::InvalidId(raw))?;

    let document = state
        .store
        .find(id)
        .await
        .map_err(AppError::Retrieve)?
        .ok_or(AppError::NotFound(id))?;

    Ok(Json(document))
}

/// First `id` pair of a query string; later repeats are ignored.
fn first_id_param(query: &str) -> Option<String> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value.into_owned())
}
