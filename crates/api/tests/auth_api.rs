//! HTTP-level integration tests for login and the guarded account routes.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, delete_auth, get, get_auth, post_json, post_json_auth,
    put_json_auth,
};
use sqlx::PgPool;

use radiodesk_api::auth::password::hash_password;
use radiodesk_db::models::user::{User, UserInput};
use radiodesk_db::repositories::UserRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const PASSWORD: &str = "test_password_123!";

/// Create a user directly in the database, bypassing the API.
async fn seed_user(pool: &PgPool, email: &str, is_admin: bool) -> User {
    let hash = hash_password(PASSWORD).expect("hashing should succeed");
    let input = UserInput {
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        email: email.to_string(),
        password: PASSWORD.to_string(),
        phone_number: None,
        is_admin,
    };
    let mut conn = pool.acquire().await.unwrap();
    UserRepo::create(&mut conn, &input, &hash)
        .await
        .expect("user creation should succeed")
}

/// Log in via the API and return the access token.
async fn login(app: axum::Router, email: &str, password: &str) -> String {
    let body = serde_json::json!({ "email": email, "password": password });
    let response = post_json(app, "/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["access_token"].as_str().unwrap().to_string()
}

fn user_payload(email: &str) -> serde_json::Value {
    serde_json::json!({
        "first_name": "New",
        "last_name": "Account",
        "email": email,
        "password": "another_password_456!",
        "phone_number": "+79991234567",
    })
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn login_returns_usable_token(pool: PgPool) {
    seed_user(&pool, "dj@station.fm", false).await;
    let app = build_test_app(pool);

    let body = serde_json::json!({ "email": "dj@station.fm", "password": PASSWORD });
    let response = post_json(app.clone(), "/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["token_type"], "bearer");
    assert!(json["expires_in"].as_i64().unwrap() > 0);
    let token = json["access_token"].as_str().unwrap();

    // The token grants access to a guarded route.
    let response = get_auth(app, "/all_users", token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn wrong_password_and_unknown_email_are_indistinguishable(pool: PgPool) {
    seed_user(&pool, "dj@station.fm", false).await;
    let app = build_test_app(pool);

    let body = serde_json::json!({ "email": "dj@station.fm", "password": "incorrect" });
    let response = post_json(app.clone(), "/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let wrong_password = body_json(response).await;

    let body = serde_json::json!({ "email": "ghost@station.fm", "password": "incorrect" });
    let response = post_json(app, "/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let unknown_email = body_json(response).await;

    assert_eq!(wrong_password, unknown_email);
}

// ---------------------------------------------------------------------------
// Guarded routes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn user_routes_require_a_token(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(app.clone(), "/all_users").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["error"], "Could not validate credentials");

    let response = post_json(app, "/add_user", user_payload("x@station.fm")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn garbage_token_is_rejected(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get_auth(app, "/all_users", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Could not validate credentials");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn token_for_deleted_user_is_rejected(pool: PgPool) {
    let user = seed_user(&pool, "leaver@station.fm", false).await;
    let app = build_test_app(pool.clone());
    let token = login(app.clone(), "leaver@station.fm", PASSWORD).await;

    let mut conn = pool.acquire().await.unwrap();
    UserRepo::delete(&mut conn, user.id).await.unwrap();

    let response = get_auth(app, "/all_users", &token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn authenticated_user_can_create_accounts(pool: PgPool) {
    seed_user(&pool, "dj@station.fm", false).await;
    let app = build_test_app(pool);
    let token = login(app.clone(), "dj@station.fm", PASSWORD).await;

    let response =
        post_json_auth(app.clone(), "/add_user", &token, user_payload("new@station.fm")).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["email"], "new@station.fm");
    assert_eq!(json["is_admin"], false);

    // The password hash must never appear in responses.
    assert!(json.get("password_hash").is_none());
    assert!(json.get("password").is_none());

    // The new account can log in with its own password.
    login(app, "new@station.fm", "another_password_456!").await;
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_email_via_api_is_409(pool: PgPool) {
    seed_user(&pool, "dj@station.fm", false).await;
    let app = build_test_app(pool);
    let token = login(app.clone(), "dj@station.fm", PASSWORD).await;

    let response =
        post_json_auth(app, "/add_user", &token, user_payload("dj@station.fm")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

// ---------------------------------------------------------------------------
// Admin-only routes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn non_admin_cannot_update_or_delete_accounts(pool: PgPool) {
    seed_user(&pool, "plain@station.fm", false).await;
    let victim = seed_user(&pool, "victim@station.fm", false).await;
    let app = build_test_app(pool.clone());
    let token = login(app.clone(), "plain@station.fm", PASSWORD).await;

    let response = put_json_auth(
        app.clone(),
        &format!("/update_user/{}", victim.id),
        &token,
        user_payload("renamed@station.fm"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["code"], "FORBIDDEN");

    let response = delete_auth(app, &format!("/delete_user/{}", victim.id), &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Both rejected calls must leave the row untouched.
    let mut conn = pool.acquire().await.unwrap();
    let row = UserRepo::get_by_id(&mut conn, victim.id).await.unwrap();
    assert_eq!(row.email, "victim@station.fm");
    assert_eq!(row.first_name, "Test");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_can_replace_and_delete_accounts(pool: PgPool) {
    seed_user(&pool, "boss@station.fm", true).await;
    let target = seed_user(&pool, "target@station.fm", false).await;
    let app = build_test_app(pool);
    let token = login(app.clone(), "boss@station.fm", PASSWORD).await;

    let mut payload = user_payload("renamed@station.fm");
    payload["first_name"] = serde_json::json!("Renamed");
    let response = put_json_auth(
        app.clone(),
        &format!("/update_user/{}", target.id),
        &token,
        payload,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["first_name"], "Renamed");
    assert_eq!(json["email"], "renamed@station.fm");

    let response = delete_auth(app, &format!("/delete_user/{}", target.id), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
