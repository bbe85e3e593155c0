//! HTTP-level integration tests for the drink endpoints, including
//! bearer-token authorization and permission-claim enforcement.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, delete_auth, get, get_auth, patch_json_auth, post_json_auth, test_token,
};
use sqlx::PgPool;

/// A valid create payload for a layered latte.
fn latte_payload() -> serde_json::Value {
    serde_json::json!({
        "title": "Matcha Latte",
        "recipe": [
            {"name": "matcha", "color": "#74B72E", "parts": 1},
            {"name": "steamed milk", "color": "#FFF8E7", "parts": 3}
        ]
    })
}

/// Create a drink with a properly-permissioned token, returning its id.
async fn seed_drink(pool: &PgPool) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/drinks",
        latte_payload(),
        &test_token(&["post:drinks"]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["drinks"][0]["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Public listing
// ---------------------------------------------------------------------------

/// The public listing needs no token and strips ingredient names.
#[sqlx::test(migrations = "../../migrations")]
async fn test_public_listing_uses_short_recipe(pool: PgPool) {
    seed_drink(&pool).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/drinks").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    let recipe = json["drinks"][0]["recipe"].as_array().unwrap();
    assert_eq!(recipe.len(), 2);
    assert!(recipe[0].get("name").is_none(), "short form must omit names");
    assert_eq!(recipe[0]["color"], "#74B72E");
    assert_eq!(recipe[1]["parts"], 3);
}

/// An empty menu is a normal empty success.
#[sqlx::test(migrations = "../../migrations")]
async fn test_empty_menu_is_empty_success(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/drinks").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["drinks"].as_array().unwrap().len(), 0);
}

// ---------------------------------------------------------------------------
// Authorization
// ---------------------------------------------------------------------------

/// The detail listing rejects requests without a token.
#[sqlx::test(migrations = "../../migrations")]
async fn test_detail_without_token_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/drinks-detail").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 401);
}

/// A garbage token is rejected with 401.
#[sqlx::test(migrations = "../../migrations")]
async fn test_detail_with_invalid_token_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/drinks-detail", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A valid token missing the required permission is rejected with 403.
#[sqlx::test(migrations = "../../migrations")]
async fn test_detail_without_permission_returns_403(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/drinks-detail", &test_token(&["post:drinks"])).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 403);
}

/// The detail listing includes ingredient names for a permitted token.
#[sqlx::test(migrations = "../../migrations")]
async fn test_detail_with_permission_uses_long_recipe(pool: PgPool) {
    seed_drink(&pool).await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/drinks-detail", &test_token(&["get:drinks-detail"])).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["drinks"][0]["recipe"][0]["name"], "matcha");
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// Creating a drink returns the long form of only the created drink.
#[sqlx::test(migrations = "../../migrations")]
async fn test_create_drink_returns_created_row(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/drinks",
        latte_payload(),
        &test_token(&["post:drinks"]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    let drinks = json["drinks"].as_array().unwrap();
    assert_eq!(drinks.len(), 1);
    assert_eq!(drinks[0]["title"], "Matcha Latte");
    assert_eq!(drinks[0]["recipe"][0]["name"], "matcha");
}

/// A missing title is rejected with 422.
#[sqlx::test(migrations = "../../migrations")]
async fn test_create_drink_missing_title_returns_422(pool: PgPool) {
    let mut payload = latte_payload();
    payload["title"] = serde_json::json!("");

    let app = common::build_test_app(pool);
    let response =
        post_json_auth(app, "/drinks", payload, &test_token(&["post:drinks"])).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

/// An empty recipe is rejected with 422.
#[sqlx::test(migrations = "../../migrations")]
async fn test_create_drink_empty_recipe_returns_422(pool: PgPool) {
    let mut payload = latte_payload();
    payload["recipe"] = serde_json::json!([]);

    let app = common::build_test_app(pool);
    let response =
        post_json_auth(app, "/drinks", payload, &test_token(&["post:drinks"])).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

/// A duplicate title violates the unique constraint and yields 409.
#[sqlx::test(migrations = "../../migrations")]
async fn test_create_duplicate_title_returns_409(pool: PgPool) {
    seed_drink(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/drinks",
        latte_payload(),
        &test_token(&["post:drinks"]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

/// A patch replaces only the supplied fields.
#[sqlx::test(migrations = "../../migrations")]
async fn test_patch_drink_partial_update(pool: PgPool) {
    let id = seed_drink(&pool).await;

    let app = common::build_test_app(pool);
    let response = patch_json_auth(
        app,
        &format!("/drinks/{id}"),
        serde_json::json!({"title": "Iced Matcha Latte"}),
        &test_token(&["patch:drinks"]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["drinks"][0]["title"], "Iced Matcha Latte");
    // The recipe is untouched.
    assert_eq!(json["drinks"][0]["recipe"][0]["name"], "matcha");
}

/// Patching a nonexistent drink yields 404.
#[sqlx::test(migrations = "../../migrations")]
async fn test_patch_nonexistent_drink_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = patch_json_auth(
        app,
        "/drinks/999",
        serde_json::json!({"title": "Ghost"}),
        &test_token(&["patch:drinks"]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

/// Deleting returns the deleted id under the `delete` key.
#[sqlx::test(migrations = "../../migrations")]
async fn test_delete_drink(pool: PgPool) {
    let id = seed_drink(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response =
        delete_auth(app, &format!("/drinks/{id}"), &test_token(&["delete:drinks"])).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["delete"], id);

    // The menu is empty again.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/drinks").await).await;
    assert_eq!(json["drinks"].as_array().unwrap().len(), 0);
}

/// Deleting a nonexistent drink yields 404.
#[sqlx::test(migrations = "../../migrations")]
async fn test_delete_nonexistent_drink_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete_auth(app, "/drinks/999", &test_token(&["delete:drinks"])).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Deleting without the delete permission is rejected with 403.
#[sqlx::test(migrations = "../../migrations")]
async fn test_delete_without_permission_returns_403(pool: PgPool) {
    let id = seed_drink(&pool).await;

    let app = common::build_test_app(pool);
    let response = delete_auth(
        app,
        &format!("/drinks/{id}"),
        &test_token(&["get:drinks-detail"]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
