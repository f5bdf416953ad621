//! Route definitions for screenings.
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

use crate::handlers::screenings;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(screenings::get_all).post(screenings::insert))
        .route(
            "/{id}",
            get(screenings::get_by_id)
                .put(screenings::modify)
                .delete(screenings::delete),
        )
}
