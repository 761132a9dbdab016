//! HTTP-level integration tests for the flat catalog CRUD routes.
//!
//! Each test drives the full middleware stack and router via `oneshot`
//! requests, backed by a fresh per-test database.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, post_json, put_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Create / read round trip
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn genre_crud_round_trip(pool: PgPool) {
    let app = build_test_app(pool);

    // Create.
    let body = serde_json::json!({ "genre_name": "Jazz", "genre_desc": "Late night sets" });
    let response = post_json(app.clone(), "/add_genre", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["genre_name"], "Jazz");

    // Read back.
    let response = get(app.clone(), &format!("/genre/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(fetched, created);

    // Replace: omitting the description nulls it.
    let body = serde_json::json!({ "genre_name": "Bebop" });
    let response = put_json(app.clone(), &format!("/update_genre/{id}"), body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["genre_name"], "Bebop");
    assert!(updated["genre_desc"].is_null());

    // Delete.
    let response = delete(app.clone(), &format!("/delete_genre/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Gone.
    let response = get(app, &format!("/genre/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_all_returns_every_row(pool: PgPool) {
    let app = build_test_app(pool);

    for name in ["Morning Drive", "Night Owls"] {
        let body = serde_json::json!({
            "program_name": name,
            "duration": "02:00:00",
            "program_ratings": 5,
        });
        let response = post_json(app.clone(), "/add_program", body).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(app, "/all_programs").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let programs = json.as_array().unwrap();
    assert_eq!(programs.len(), 2);
    assert_eq!(programs[0]["program_name"], "Morning Drive");
    assert_eq!(programs[1]["program_name"], "Night Owls");
}

// ---------------------------------------------------------------------------
// Error responses
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_row_returns_404_with_code(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(app, "/program/9999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Program with id 9999 not found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_payload_returns_400_listing_fields(pool: PgPool) {
    let app = build_test_app(pool);

    // Empty name and an out-of-range rating must both be reported.
    let body = serde_json::json!({
        "program_name": "",
        "duration": "01:00:00",
        "program_ratings": 42,
    });
    let response = post_json(app.clone(), "/add_program", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    let message = json["error"].as_str().unwrap();
    assert!(message.contains("program_name"));
    assert!(message.contains("program_ratings"));

    // Nothing was inserted.
    let response = get(app, "/all_programs").await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn dangling_reference_returns_409(pool: PgPool) {
    let app = build_test_app(pool);

    let body = serde_json::json!({
        "track_name": "Ghost Song",
        "release_date": "2024-06-01",
        "duration": "00:03:45",
        "artist_id": 9999,
    });
    let response = post_json(app.clone(), "/add_track", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["error"], "Artist with id 9999 not found");

    let response = get(app, "/all_tracks").await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn track_with_null_references_is_accepted(pool: PgPool) {
    let app = build_test_app(pool);

    let body = serde_json::json!({
        "track_name": "Unsigned Demo",
        "release_date": "2024-06-01",
        "duration": "00:02:30",
    });
    let response = post_json(app, "/add_track", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["artist_id"].is_null());
    assert!(json["genre_id"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn pair_creation_checks_both_sides(pool: PgPool) {
    let app = build_test_app(pool);

    let body = serde_json::json!({
        "host_name": "Lena Marsh",
        "experience": 6,
        "age": 34,
    });
    let response = post_json(app.clone(), "/add_host", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let host = body_json(response).await;

    // Host exists, program does not.
    let body = serde_json::json!({
        "host_id": host["id"],
        "program_id": 555,
    });
    let response = post_json(app.clone(), "/add_host_program_pair", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Program with id 555 not found");
}

// ---------------------------------------------------------------------------
// Update semantics
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn update_of_missing_row_is_404(pool: PgPool) {
    let app = build_test_app(pool);

    let body = serde_json::json!({
        "program_name": "Does Not Exist",
        "duration": "01:00:00",
        "program_ratings": 3,
    });
    let response = put_json(app, "/update_program/777", body).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_of_missing_row_is_404(pool: PgPool) {
    let app = build_test_app(pool);

    let response = delete(app, "/delete_playlist/777").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
