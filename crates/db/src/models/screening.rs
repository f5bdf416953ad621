//! Screening entity model.

use cartelera_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use sqlx::FromRow;

/// A row from the `screenings` table.
///
/// `movie_id` references `movies.id` and is never NULL: a screening cannot
/// exist without a valid movie.
#[derive(Debug, Clone, FromRow)]
pub struct Screening {
    pub id: DbId,
    pub movie_id: DbId,
    pub room_id: i64,
    pub date: NaiveDate,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insertable screening record; also the full-overwrite update shape.
#[derive(Debug, Clone)]
pub struct NewScreening {
    pub movie_id: DbId,
    pub room_id: i64,
    pub date: NaiveDate,
}
