//! Handlers for the `/peliculas` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::dto::MovieDto;
use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::services::MovieService;
use crate::state::AppState;

/// POST /peliculas/
pub async fn insert(
    State(state): State<AppState>,
    Json(input): Json<MovieDto>,
) -> AppResult<(StatusCode, Json<MovieDto>)> {
    let created = MovieService::insert(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /peliculas/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MovieDto>> {
    let movie = MovieService::get_by_id(&state.pool, &id).await?;
    Ok(Json(movie))
}

/// PUT /peliculas/{id}
pub async fn modify(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<MovieDto>,
) -> AppResult<Json<MovieDto>> {
    let updated = MovieService::modify(&state.pool, &id, &input).await?;
    Ok(Json(updated))
}

/// DELETE /peliculas/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    MovieService::delete(&state.pool, &id).await?;
    Ok(Json(MessageResponse {
        message: format!("movie {id} deleted"),
    }))
}

/// GET /peliculas/
///
/// An empty table answers 204 instead of an empty array.
pub async fn get_all(State(state): State<AppState>) -> AppResult<Response> {
    let movies = MovieService::get_all(&state.pool).await?;
    if movies.is_empty() {
        Ok(StatusCode::NO_CONTENT.into_response())
    } else {
        Ok(Json(movies).into_response())
    }
}
