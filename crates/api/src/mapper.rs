//! Stateless entity/DTO conversions.
//!
//! Pure field copies; the services own all validation and lookups. The
//! screening conversion takes the already-resolved [`Movie`] so the stored
//! reference always comes from an entity that exists, never from the raw
//! `movieId` the client sent.

use cartelera_db::models::movie::{Movie, NewMovie};
use cartelera_db::models::screening::{NewScreening, Screening};

use crate::dto::{MovieDto, ScreeningDto};

pub fn movie_to_dto(movie: &Movie) -> MovieDto {
    MovieDto {
        id: Some(movie.id),
        title: movie.title.clone(),
        director: movie.director.clone(),
        time: movie.time,
        trailer: movie.trailer.clone(),
        poster_image: movie.poster_image.clone(),
        screenshot: movie.screenshot.clone(),
        synopsis: movie.synopsis.clone(),
        rating: movie.rating,
    }
}

pub fn movie_from_dto(dto: &MovieDto) -> NewMovie {
    NewMovie {
        title: dto.title.clone(),
        director: dto.director.clone(),
        time: dto.time,
        trailer: dto.trailer.clone(),
        poster_image: dto.poster_image.clone(),
        screenshot: dto.screenshot.clone(),
        synopsis: dto.synopsis.clone(),
        rating: dto.rating,
    }
}

pub fn screening_to_dto(screening: &Screening) -> ScreeningDto {
    ScreeningDto {
        id: Some(screening.id),
        movie_id: screening.movie_id,
        room_id: screening.room_id,
        date: screening.date,
    }
}

pub fn screening_from_dto(dto: &ScreeningDto, movie: &Movie) -> NewScreening {
    NewScreening {
        movie_id: movie.id,
        room_id: dto.room_id,
        date: dto.date,
    }
}
