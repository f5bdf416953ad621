//! Handlers for the `/sesiones` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::dto::ScreeningDto;
use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::services::ScreeningService;
use crate::state::AppState;

/// POST /sesiones/
pub async fn insert(
    State(state): State<AppState>,
    Json(input): Json<ScreeningDto>,
) -> AppResult<(StatusCode, Json<ScreeningDto>)> {
    let created = ScreeningService::insert(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /sesiones/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ScreeningDto>> {
    let screening = ScreeningService::get_by_id(&state.pool, &id).await?;
    Ok(Json(screening))
}

/// PUT /sesiones/{id}
pub async fn modify(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<ScreeningDto>,
) -> AppResult<Json<ScreeningDto>> {
    let updated = ScreeningService::modify(&state.pool, &id, &input).await?;
    Ok(Json(updated))
}

/// DELETE /sesiones/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    ScreeningService::delete(&state.pool, &id).await?;
    Ok(Json(MessageResponse {
        message: format!("screening {id} deleted"),
    }))
}

/// GET /sesiones/
///
/// An empty table answers 204 instead of an empty array.
pub async fn get_all(State(state): State<AppState>) -> AppResult<Response> {
    let screenings = ScreeningService::get_all(&state.pool).await?;
    if screenings.is_empty() {
        Ok(StatusCode::NO_CONTENT.into_response())
    } else {
        Ok(Json(screenings).into_response())
    }
}
