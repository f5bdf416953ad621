//! Transport DTOs.
//!
//! These are the JSON shapes exchanged over HTTP, distinct from the
//! persistence entities in `cartelera_db::models`. Field names follow the
//! wire contract (camelCase). `id` is ignored on input and always present
//! on output.

use cartelera_core::types::DbId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Wire shape of a movie.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MovieDto {
    pub id: Option<DbId>,
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "director must not be empty"))]
    pub director: String,
    /// Runtime in minutes.
    #[validate(range(min = 1, message = "time must be a positive number of minutes"))]
    pub time: i32,
    pub trailer: Option<String>,
    pub poster_image: Option<String>,
    pub screenshot: Option<String>,
    pub synopsis: Option<String>,
    #[validate(range(min = 0.0, max = 10.0, message = "rating must be between 0 and 10"))]
    pub rating: Option<f64>,
}

/// Wire shape of a screening.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningDto {
    pub id: Option<DbId>,
    #[validate(range(min = 1, message = "movieId must be a positive id"))]
    pub movie_id: DbId,
    #[validate(range(min = 1, message = "roomId must be a positive id"))]
    pub room_id: i64,
    /// ISO calendar date of the screening.
    pub date: NaiveDate,
}
