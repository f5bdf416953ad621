//! CRUD orchestration for movies.

use cartelera_core::error::CoreError;
use cartelera_core::types::parse_id;
use cartelera_db::repositories::MovieRepo;
use cartelera_db::DbPool;
use validator::Validate;

use crate::dto::MovieDto;
use crate::error::AppResult;
use crate::mapper;

pub struct MovieService;

impl MovieService {
    /// Create a movie from its DTO, returning the stored shape with the
    /// generated id.
    pub async fn insert(pool: &DbPool, dto: &MovieDto) -> AppResult<MovieDto> {
        dto.validate()
            .map_err(|e| CoreError::InvalidArgument(e.to_string()))?;
        let movie = MovieRepo::create(pool, &mapper::movie_from_dto(dto)).await?;
        Ok(mapper::movie_to_dto(&movie))
    }

    /// Fetch a movie by its string id.
    pub async fn get_by_id(pool: &DbPool, raw_id: &str) -> AppResult<MovieDto> {
        let id = parse_id("movie", raw_id)?;
        let movie = MovieRepo::find_by_id(pool, id)
            .await?
            .ok_or(CoreError::NotFound { entity: "movie", id })?;
        Ok(mapper::movie_to_dto(&movie))
    }

    /// Overwrite every mutable field of an existing movie.
    pub async fn modify(pool: &DbPool, raw_id: &str, dto: &MovieDto) -> AppResult<MovieDto> {
        let id = parse_id("movie", raw_id)?;
        dto.validate()
            .map_err(|e| CoreError::InvalidArgument(e.to_string()))?;
        let movie = MovieRepo::update(pool, id, &mapper::movie_from_dto(dto))
            .await?
            .ok_or(CoreError::NotFound { entity: "movie", id })?;
        Ok(mapper::movie_to_dto(&movie))
    }

    /// Delete a movie by its string id.
    ///
    /// Existence is checked first so an absent id reports NotFound rather
    /// than silently succeeding.
    pub async fn delete(pool: &DbPool, raw_id: &str) -> AppResult<()> {
        let id = parse_id("movie", raw_id)?;
        if !MovieRepo::exists(pool, id).await? {
            return Err(CoreError::NotFound { entity: "movie", id }.into());
        }
        MovieRepo::delete(pool, id).await?;
        Ok(())
    }

    /// List every registered movie; an empty table yields an empty list.
    pub async fn get_all(pool: &DbPool) -> AppResult<Vec<MovieDto>> {
        let movies = MovieRepo::list_all(pool).await?;
        Ok(movies.iter().map(mapper::movie_to_dto).collect())
    }
}
