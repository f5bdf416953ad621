//! CRUD orchestration for screenings.
//!
//! Screenings reference a movie, so every write resolves the referenced
//! movie first; a missing movie fails the operation before anything is
//! persisted.

use cartelera_core::error::CoreError;
use cartelera_core::types::{parse_id, DbId};
use cartelera_db::models::movie::Movie;
use cartelera_db::repositories::{MovieRepo, ScreeningRepo};
use cartelera_db::DbPool;
use validator::Validate;

use crate::dto::ScreeningDto;
use crate::error::AppResult;
use crate::mapper;

pub struct ScreeningService;

impl ScreeningService {
    /// Create a screening from its DTO, returning the stored shape with the
    /// generated id.
    pub async fn insert(pool: &DbPool, dto: &ScreeningDto) -> AppResult<ScreeningDto> {
        dto.validate()
            .map_err(|e| CoreError::InvalidArgument(e.to_string()))?;
        let movie = resolve_movie(pool, dto.movie_id).await?;
        let screening = ScreeningRepo::create(pool, &mapper::screening_from_dto(dto, &movie)).await?;
        Ok(mapper::screening_to_dto(&screening))
    }

    /// Fetch a screening by its string id.
    pub async fn get_by_id(pool: &DbPool, raw_id: &str) -> AppResult<ScreeningDto> {
        let id = parse_id("screening", raw_id)?;
        let screening = ScreeningRepo::find_by_id(pool, id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "screening",
                id,
            })?;
        Ok(mapper::screening_to_dto(&screening))
    }

    /// Overwrite every mutable field of an existing screening, re-resolving
    /// the movie reference.
    pub async fn modify(pool: &DbPool, raw_id: &str, dto: &ScreeningDto) -> AppResult<ScreeningDto> {
        let id = parse_id("screening", raw_id)?;
        dto.validate()
            .map_err(|e| CoreError::InvalidArgument(e.to_string()))?;
        let movie = resolve_movie(pool, dto.movie_id).await?;
        let screening = ScreeningRepo::update(pool, id, &mapper::screening_from_dto(dto, &movie))
            .await?
            .ok_or(CoreError::NotFound {
                entity: "screening",
                id,
            })?;
        Ok(mapper::screening_to_dto(&screening))
    }

    /// Delete a screening by its string id, checking existence first.
    pub async fn delete(pool: &DbPool, raw_id: &str) -> AppResult<()> {
        let id = parse_id("screening", raw_id)?;
        if !ScreeningRepo::exists(pool, id).await? {
            return Err(CoreError::NotFound {
                entity: "screening",
                id,
            }
            .into());
        }
        ScreeningRepo::delete(pool, id).await?;
        Ok(())
    }

    /// List every registered screening; an empty table yields an empty list.
    pub async fn get_all(pool: &DbPool) -> AppResult<Vec<ScreeningDto>> {
        let screenings = ScreeningRepo::list_all(pool).await?;
        Ok(screenings.iter().map(mapper::screening_to_dto).collect())
    }
}

async fn resolve_movie(pool: &DbPool, movie_id: DbId) -> AppResult<Movie> {
    Ok(MovieRepo::find_by_id(pool, movie_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "movie",
            id: movie_id,
        })?)
}
