//! Route tree.
//!
//! ```text
//! /health                  service + database health
//!
//! /peliculas               list, create
//! /peliculas/{id}          get, update, delete
//!
//! /sesiones                list, create
//! /sesiones/{id}           get, update, delete
//! ```

pub mod health;
pub mod movies;
pub mod screenings;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree (everything except `/health`).
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/peliculas", movies::router())
        .nest("/sesiones", screenings::router())
}
