use crate::types::DbId;

/// Domain-level error kinds.
///
/// This is a closed set: anything a service can fail with that is not a
/// storage failure is one of these. Storage failures stay `sqlx::Error`
/// until the HTTP layer wraps them.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The caller supplied a malformed argument (bad ID format, failed
    /// field validation). Maps to 400.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The named entity does not exist. Maps to 404.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },
}
