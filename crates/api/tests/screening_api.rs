//! HTTP-level integration tests for the `/sesiones` resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

/// Insert a movie and return its id.
async fn seed_movie(pool: &PgPool) -> i64 {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/peliculas/",
            serde_json::json!({"title": "Dune", "director": "Villeneuve", "time": 155}),
        )
        .await,
    )
    .await;
    created["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_screening_returns_201_with_generated_id(pool: PgPool) {
    let movie_id = seed_movie(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/sesiones/",
        serde_json::json!({"movieId": movie_id, "roomId": 3, "date": "2024-05-01"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert_eq!(json["movieId"], movie_id);
    assert_eq!(json["roomId"], 3);
    assert_eq!(json["date"], "2024-05-01");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_with_unknown_movie_fails_and_persists_nothing(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/sesiones/",
        serde_json::json!({"movieId": 999999, "roomId": 1, "date": "2024-05-01"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // No screening record was created.
    let app = common::build_test_app(pool);
    let response = get(app, "/sesiones/").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_with_nonpositive_room_returns_400(pool: PgPool) {
    let movie_id = seed_movie(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/sesiones/",
        serde_json::json!({"movieId": movie_id, "roomId": 0, "date": "2024-05-01"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_with_non_numeric_id_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/sesiones/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_absent_id_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/sesiones/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_changes_room_and_keeps_other_fields(pool: PgPool) {
    let movie_id = seed_movie(&pool).await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/sesiones/",
            serde_json::json!({"movieId": movie_id, "roomId": 3, "date": "2024-05-01"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/sesiones/{id}"),
        serde_json::json!({"movieId": movie_id, "roomId": 4, "date": "2024-05-01"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["roomId"], 4);
    assert_eq!(json["movieId"], movie_id);
    assert_eq!(json["date"], "2024-05-01");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_with_unknown_movie_returns_404(pool: PgPool) {
    let movie_id = seed_movie(&pool).await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/sesiones/",
            serde_json::json!({"movieId": movie_id, "roomId": 3, "date": "2024-05-01"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/sesiones/{id}"),
        serde_json::json!({"movieId": 999999, "roomId": 3, "date": "2024-05-01"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_absent_id_returns_404(pool: PgPool) {
    let movie_id = seed_movie(&pool).await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/sesiones/999999",
        serde_json::json!({"movieId": movie_id, "roomId": 1, "date": "2024-05-01"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete and list
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_returns_confirmation_and_removes_row(pool: PgPool) {
    let movie_id = seed_movie(&pool).await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/sesiones/",
            serde_json::json!({"movieId": movie_id, "roomId": 2, "date": "2024-05-01"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/sesiones/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["message"].is_string());

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/sesiones/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_absent_id_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/sesiones/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_on_empty_table_returns_204(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/sesiones/").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
