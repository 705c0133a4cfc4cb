//! Integration tests for account CRUD at the repository layer.

use sqlx::PgPool;

use mastery_db::models::user::{CreateUser, UpdateUser};
use mastery_db::repositories::UserRepo;

fn new_user(username: &str) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password_hash: "$argon2id$fake-hash".to_string(),
        first_name: Some("Test".to_string()),
        last_name: None,
        roles: 0,
    }
}

#[sqlx::test]
async fn create_and_find_roundtrip(pool: PgPool) {
    let created = UserRepo::create(&pool, &new_user("ada")).await.unwrap();
    assert_eq!(created.username, "ada");
    assert!(created.is_onboarding);
    assert!(created.is_active);

    let by_id = UserRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(by_id.email, "ada@example.com");

    let by_username = UserRepo::find_by_username(&pool, "ada").await.unwrap().unwrap();
    assert_eq!(by_username.id, created.id);

    let by_email = UserRepo::find_by_email(&pool, "ada@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_email.id, created.id);
}

#[sqlx::test]
async fn duplicate_username_violates_unique_constraint(pool: PgPool) {
    UserRepo::create(&pool, &new_user("grace")).await.unwrap();

    let mut dup = new_user("grace");
    dup.email = "other@example.com".to_string();
    let err = UserRepo::create(&pool, &dup).await.unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_users_username"));
        }
        other => panic!("expected a database error, got {other:?}"),
    }
}

#[sqlx::test]
async fn partial_update_only_touches_provided_fields(pool: PgPool) {
    let created = UserRepo::create(&pool, &new_user("edsger")).await.unwrap();

    let input = UpdateUser {
        first_name: Some("Edsger".to_string()),
        last_name: Some("Dijkstra".to_string()),
        ..UpdateUser::default()
    };
    let updated = UserRepo::update(&pool, created.id, &input)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.first_name.as_deref(), Some("Edsger"));
    assert_eq!(updated.last_name.as_deref(), Some("Dijkstra"));
    assert_eq!(updated.username, "edsger", "unspecified fields keep their value");
    assert_eq!(updated.email, "edsger@example.com");
}

#[sqlx::test]
async fn update_missing_user_returns_none(pool: PgPool) {
    let result = UserRepo::update(&pool, 424242, &UpdateUser::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test]
async fn deactivate_is_idempotent(pool: PgPool) {
    let created = UserRepo::create(&pool, &new_user("tony")).await.unwrap();

    assert!(UserRepo::deactivate(&pool, created.id).await.unwrap());
    // Second call finds no active row to touch.
    assert!(!UserRepo::deactivate(&pool, created.id).await.unwrap());

    let user = UserRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert!(!user.is_active);
}

#[sqlx::test]
async fn list_orders_newest_first(pool: PgPool) {
    UserRepo::create(&pool, &new_user("first")).await.unwrap();
    UserRepo::create(&pool, &new_user("second")).await.unwrap();

    let users = UserRepo::list(&pool).await.unwrap();
    assert_eq!(users.len(), 2);
    assert!(
        users[0].created_at >= users[1].created_at,
        "list must be ordered most recent first"
    );
}
