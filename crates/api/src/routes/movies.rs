//! Route definitions for movies.
//!
//! ```text
//! GET    /        -> get_all
//! POST   /        -> insert
//! GET    /{id}    -> get_by_id
//! PUT    /{id}    -> modify
//! DELETE /{id}    -> delete
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movies::get_all).post(movies::insert))
        .route(
            "/{id}",
            get(movies::get_by_id)
                .put(movies::modify)
                .delete(movies::delete),
        )
}
