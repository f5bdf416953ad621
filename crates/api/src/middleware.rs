//! Response middleware.

use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::error::ErrorMessage;
use crate::response::ErrorBody;

/// Render failed responses as the wire error shape.
///
/// [`crate::error::AppError`] stashes its message in response extensions
/// because the error value itself has no access to the request. This layer
/// captures the request path, runs the inner service, and turns the stashed
/// message into the `{message, uri}` JSON body every error response carries.
pub async fn error_body(request: Request, next: Next) -> Response {
    let uri = request.uri().path().to_string();
    let mut response = next.run(request).await;

    if let Some(ErrorMessage(message)) = response.extensions_mut().remove::<ErrorMessage>() {
        let status = response.status();
        return (status, Json(ErrorBody { message, uri })).into_response();
    }
    response
}

/// Fallback for routes that match nothing, so unknown paths share the wire
/// error shape instead of axum's empty 404.
pub async fn not_found(request: Request) -> Response {
    let uri = request.uri().path().to_string();
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            message: "no such resource".to_string(),
            uri,
        }),
    )
        .into_response()
}
