use crate::error::CoreError;

/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Parse a path-segment ID into a [`DbId`].
///
/// IDs arrive as strings and must parse to a positive integer. Anything
/// else is an [`CoreError::InvalidArgument`], which is a different failure
/// from the entity not existing.
pub fn parse_id(entity: &'static str, raw: &str) -> Result<DbId, CoreError> {
    raw.parse::<DbId>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| {
            CoreError::InvalidArgument(format!("{entity} id {raw:?} is not a positive integer"))
        })
}
