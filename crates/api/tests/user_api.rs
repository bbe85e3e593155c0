//! HTTP-level integration tests for the minimal user endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, post_json};
use encore_db::repositories::UserRepo;
use sqlx::PgPool;

/// Creating a user returns the stored row.
#[sqlx::test(migrations = "../../migrations")]
async fn test_create_user(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/users",
        serde_json::json!({"nickname": "ram", "email": "ram@example.com"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["user"]["nickname"], "ram");

    let id = json["user"]["id"].as_i64().unwrap();
    let stored = UserRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(stored.email, "ram@example.com");
}

/// A malformed email is rejected with 422.
#[sqlx::test(migrations = "../../migrations")]
async fn test_create_user_bad_email_returns_422(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/users",
        serde_json::json!({"nickname": "ram", "email": "not-an-email"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

/// Deleting an existing user removes the row.
#[sqlx::test(migrations = "../../migrations")]
async fn test_delete_user(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/users",
            serde_json::json!({"nickname": "gone", "email": "gone@example.com"}),
        )
        .await,
    )
    .await;
    let id = created["user"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/users/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    assert!(UserRepo::find_by_id(&pool, id).await.unwrap().is_none());
}

/// Deleting a nonexistent user yields 404.
#[sqlx::test(migrations = "../../migrations")]
async fn test_delete_nonexistent_user_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/users/31337").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
