use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cartelera_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and `sqlx::Error` for storage
/// failures. Implements [`IntoResponse`], which selects the status code and
/// stashes the message; [`crate::middleware::error_body`] renders the final
/// `{message, uri}` JSON body once the request path is known.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `cartelera_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage failure from sqlx, carrying the original cause.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler and service return values.
pub type AppResult<T> = Result<T, AppError>;

/// Human-readable error message stashed in response extensions for the
/// error-body middleware.
#[derive(Debug, Clone)]
pub struct ErrorMessage(pub String);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(CoreError::InvalidArgument(_)) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::Core(CoreError::NotFound { .. }) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Database(err) => classify_sqlx_error(err),
        };

        let mut response = status.into_response();
        response.extensions_mut().insert(ErrorMessage(message));
        response
    }
}

/// Classify a sqlx error into an HTTP status and a client-safe message.
///
/// - `RowNotFound` maps to 404.
/// - Foreign-key violations (PostgreSQL code 23503) map to 409.
/// - Everything else maps to 500 with a sanitized message; the original
///   cause is logged, never sent to the client.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "resource not found".to_string()),
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23503") => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            tracing::warn!(%constraint, "foreign key violation");
            (
                StatusCode::CONFLICT,
                "operation conflicts with existing references".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "unexpected database error".to_string(),
            )
        }
    }
}
