//! Movie entity model.

use cartelera_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `movies` table.
#[derive(Debug, Clone, FromRow)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub director: String,
    /// Runtime in minutes.
    pub time: i32,
    pub trailer: Option<String>,
    pub poster_image: Option<String>,
    pub screenshot: Option<String>,
    pub synopsis: Option<String>,
    pub rating: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insertable movie record; also the full-overwrite update shape.
#[derive(Debug, Clone)]
pub struct NewMovie {
    pub title: String,
    pub director: String,
    pub time: i32,
    pub trailer: Option<String>,
    pub poster_image: Option<String>,
    pub screenshot: Option<String>,
    pub synopsis: Option<String>,
    pub rating: Option<f64>,
}
