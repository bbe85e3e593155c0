//! HTTP-level integration tests for the trivia category and question
//! endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json};
use encore_db::repositories::CategoryRepo;
use sqlx::PgPool;

/// Seed a category directly and return its id.
async fn seed_category(pool: &PgPool, kind: &str) -> i64 {
    CategoryRepo::create(pool, kind).await.unwrap().id
}

/// Seed `count` questions into a category via the API.
async fn seed_questions(pool: &PgPool, category_id: i64, count: usize) {
    for i in 0..count {
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            "/questions/add",
            serde_json::json!({
                "question": format!("Question number {i}?"),
                "answer": format!("Answer {i}"),
                "category": category_id,
                "difficulty": 2
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// GET /categories returns every category with id and type.
#[sqlx::test(migrations = "../../migrations")]
async fn test_get_categories(pool: PgPool) {
    seed_category(&pool, "Science").await;
    seed_category(&pool, "History").await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/categories").await).await;

    assert_eq!(json["success"], true);
    let categories = json["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0]["type"], "Science");
    assert!(categories[0]["id"].is_number());
}

// ---------------------------------------------------------------------------
// Paginated listing
// ---------------------------------------------------------------------------

/// Page 1 of a collection larger than the page size holds exactly 10 rows.
#[sqlx::test(migrations = "../../migrations")]
async fn test_first_page_holds_page_size_rows(pool: PgPool) {
    let category_id = seed_category(&pool, "Science").await;
    seed_questions(&pool, category_id, 12).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/questions?page=1").await).await;

    assert_eq!(json["success"], true);
    assert_eq!(json["questions"].as_array().unwrap().len(), 10);
    assert_eq!(json["totalQuestions"], 12);
    assert_eq!(json["categories"].as_array().unwrap().len(), 1);
}

/// The second page holds the remainder.
#[sqlx::test(migrations = "../../migrations")]
async fn test_second_page_holds_remainder(pool: PgPool) {
    let category_id = seed_category(&pool, "Science").await;
    seed_questions(&pool, category_id, 12).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/questions?page=2").await).await;

    assert_eq!(json["questions"].as_array().unwrap().len(), 2);
}

/// A page beyond the last yields 404 with `success=false`.
#[sqlx::test(migrations = "../../migrations")]
async fn test_page_beyond_last_returns_404(pool: PgPool) {
    let category_id = seed_category(&pool, "Science").await;
    seed_questions(&pool, category_id, 3).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/questions?page=100").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 404);
}

/// A zero page index is a 400 validation error.
#[sqlx::test(migrations = "../../migrations")]
async fn test_zero_page_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/questions?page=0").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Per-category listing filters to the category and reports it.
#[sqlx::test(migrations = "../../migrations")]
async fn test_questions_by_category(pool: PgPool) {
    let science = seed_category(&pool, "Science").await;
    let history = seed_category(&pool, "History").await;
    seed_questions(&pool, science, 2).await;
    seed_questions(&pool, history, 1).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/categories/{science}/questions")).await).await;

    assert_eq!(json["questions"].as_array().unwrap().len(), 2);
    assert_eq!(json["totalQuestions"], 2);
    assert_eq!(json["currentCategory"], science);
}

/// Listing questions of an unknown category yields 404.
#[sqlx::test(migrations = "../../migrations")]
async fn test_questions_by_unknown_category_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/categories/999/questions").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Create / delete
// ---------------------------------------------------------------------------

/// Adding a question returns the created row.
#[sqlx::test(migrations = "../../migrations")]
async fn test_add_question(pool: PgPool) {
    let category_id = seed_category(&pool, "Entertainment").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/questions/add",
        serde_json::json!({
            "question": "Which Star Wars movie is the best?",
            "answer": "The Empire Strikes Back",
            "category": category_id,
            "difficulty": 1
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["question"]["question"], "Which Star Wars movie is the best?");
    assert_eq!(json["question"]["category_id"], category_id);
}

/// An out-of-range difficulty is rejected with 422.
#[sqlx::test(migrations = "../../migrations")]
async fn test_add_question_bad_difficulty_returns_422(pool: PgPool) {
    let category_id = seed_category(&pool, "Entertainment").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/questions/add",
        serde_json::json!({
            "question": "Too hard?",
            "answer": "Yes",
            "category": category_id,
            "difficulty": 9
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

/// Referencing a missing category is rejected with 422.
#[sqlx::test(migrations = "../../migrations")]
async fn test_add_question_unknown_category_returns_422(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/questions/add",
        serde_json::json!({
            "question": "Orphaned?",
            "answer": "Yes",
            "category": 12345,
            "difficulty": 1
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

/// Deleting an existing question succeeds and removes it.
#[sqlx::test(migrations = "../../migrations")]
async fn test_delete_question(pool: PgPool) {
    let category_id = seed_category(&pool, "Science").await;
    seed_questions(&pool, category_id, 1).await;

    let app = common::build_test_app(pool.clone());
    let listing = body_json(get(app, "/questions").await).await;
    let id = listing["questions"][0]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/questions/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["deleted"], id);

    // The collection is empty again, so page 1 is now out of range.
    let app = common::build_test_app(pool);
    let response = get(app, "/questions").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Deleting a nonexistent question yields 404 with `success=false`.
#[sqlx::test(migrations = "../../migrations")]
async fn test_delete_nonexistent_question_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/questions/9999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Searching for a seeded substring returns exactly the matching rows.
#[sqlx::test(migrations = "../../migrations")]
async fn test_search_questions(pool: PgPool) {
    let category_id = seed_category(&pool, "Entertainment").await;

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/questions/add",
        serde_json::json!({
            "question": "Which Star Wars movie is the best?",
            "answer": "The Empire Strikes Back",
            "category": category_id,
            "difficulty": 1
        }),
    )
    .await;

    let app = common::build_test_app(pool);
    let json = body_json(
        post_json(
            app,
            "/questions/search",
            serde_json::json!({"searchTerm": "Star Wars"}),
        )
        .await,
    )
    .await;

    assert_eq!(json["success"], true);
    assert_eq!(json["questions"].as_array().unwrap().len(), 1);
    assert_eq!(json["totalQuestions"], 1);
    assert_eq!(json["currentCategory"], category_id);
}

/// Zero matches is a normal empty success with a null category.
#[sqlx::test(migrations = "../../migrations")]
async fn test_search_questions_no_match(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/questions/search",
        serde_json::json!({"searchTerm": "Star Trek"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["questions"].as_array().unwrap().len(), 0);
    assert_eq!(json["totalQuestions"], 0);
    assert!(json["currentCategory"].is_null());
}
