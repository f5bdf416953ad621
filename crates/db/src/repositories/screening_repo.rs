//! Repository for the `screenings` table.

use cartelera_core::types::DbId;
use sqlx::PgPool;

use crate::models::screening::{NewScreening, Screening};

const COLUMNS: &str = "id, movie_id, room_id, date, created_at, updated_at";

/// Provides CRUD operations for screenings.
pub struct ScreeningRepo;

impl ScreeningRepo {
    /// Insert a new screening, returning the created row.
    ///
    /// The `movie_id` FK is enforced by the database; callers are expected
    /// to have resolved the movie first.
    pub async fn create(pool: &PgPool, input: &NewScreening) -> Result<Screening, sqlx::Error> {
        let query = format!(
            "INSERT INTO screenings (movie_id, room_id, date)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Screening>(&query)
            .bind(input.movie_id)
            .bind(input.room_id)
            .bind(input.date)
            .fetch_one(pool)
            .await
    }

    /// Find a screening by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Screening>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM screenings WHERE id = $1");
        sqlx::query_as::<_, Screening>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all screenings in insertion order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Screening>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM screenings ORDER BY id");
        sqlx::query_as::<_, Screening>(&query).fetch_all(pool).await
    }

    /// Overwrite every mutable column of a screening.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &NewScreening,
    ) -> Result<Option<Screening>, sqlx::Error> {
        let query = format!(
            "UPDATE screenings SET
                movie_id = $2,
                room_id = $3,
                date = $4,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Screening>(&query)
            .bind(id)
            .bind(input.movie_id)
            .bind(input.room_id)
            .bind(input.date)
            .fetch_optional(pool)
            .await
    }

    /// Delete a screening by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM screenings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Check whether a screening with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM screenings WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
