//! Integration tests for the user repository.

use assert_matches::assert_matches;
use sqlx::PgPool;

use radiodesk_db::models::user::UserInput;
use radiodesk_db::repositories::UserRepo;
use radiodesk_db::StoreError;

fn new_user(email: &str) -> UserInput {
    UserInput {
        first_name: "Ivan".to_string(),
        last_name: "Sokolov".to_string(),
        email: email.to_string(),
        password: "plaintext-never-stored".to_string(),
        phone_number: Some("+79991234567".to_string()),
        is_admin: false,
    }
}

// The repository stores whatever hash the boundary hands it; these tests use
// a fixed placeholder since hashing itself is covered by the API crate.
const HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$placeholder$placeholder";

#[sqlx::test(migrations = "./migrations")]
async fn create_and_round_trip(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();

    let created = UserRepo::create(&mut conn, &new_user("ivan@example.com"), HASH)
        .await
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(created.password_hash, HASH);

    let fetched = UserRepo::get_by_id(&mut conn, created.id).await.unwrap();
    assert_eq!(fetched.email, "ivan@example.com");
    assert_eq!(fetched.first_name, "Ivan");
    assert!(!fetched.is_admin);
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_email_is_already_exists_and_keeps_one_row(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();

    UserRepo::create(&mut conn, &new_user("dup@example.com"), HASH)
        .await
        .unwrap();

    let err = UserRepo::create(&mut conn, &new_user("dup@example.com"), HASH)
        .await
        .unwrap_err();
    assert_matches!(err, StoreError::AlreadyExists(_));

    let (count,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM users WHERE email = 'dup@example.com'")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn find_by_email_distinguishes_absence(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();

    assert!(UserRepo::find_by_email(&mut conn, "nobody@example.com")
        .await
        .unwrap()
        .is_none());

    UserRepo::create(&mut conn, &new_user("found@example.com"), HASH)
        .await
        .unwrap();

    let user = UserRepo::find_by_email(&mut conn, "found@example.com")
        .await
        .unwrap()
        .expect("user should be found");
    assert_eq!(user.email, "found@example.com");
}

#[sqlx::test(migrations = "./migrations")]
async fn update_replaces_every_field(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();

    let created = UserRepo::create(&mut conn, &new_user("old@example.com"), HASH)
        .await
        .unwrap();

    let mut input = new_user("new@example.com");
    input.first_name = "Pyotr".to_string();
    input.phone_number = None;
    input.is_admin = true;

    let updated = UserRepo::update(&mut conn, created.id, &input, "$argon2id$new-hash")
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.email, "new@example.com");
    assert_eq!(updated.first_name, "Pyotr");
    assert_eq!(updated.phone_number, None);
    assert!(updated.is_admin);
    assert_eq!(updated.password_hash, "$argon2id$new-hash");
}

#[sqlx::test(migrations = "./migrations")]
async fn update_and_delete_missing_user_is_not_found(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();

    let err = UserRepo::update(&mut conn, 404, &new_user("x@example.com"), HASH)
        .await
        .unwrap_err();
    assert_matches!(err, StoreError::NotFound { entity: "User", id: 404 });

    let err = UserRepo::delete(&mut conn, 404).await.unwrap_err();
    assert_matches!(err, StoreError::NotFound { .. });
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_twice_yields_not_found_second_time(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();

    let created = UserRepo::create(&mut conn, &new_user("gone@example.com"), HASH)
        .await
        .unwrap();

    UserRepo::delete(&mut conn, created.id).await.unwrap();
    let err = UserRepo::delete(&mut conn, created.id).await.unwrap_err();
    assert_matches!(err, StoreError::NotFound { .. });
}
