//! Handlers for the trivia `/categories` and `/questions` resources.
//!
//! Question listings are paginated at a fixed 10 rows per 1-based page;
//! a page past the end of the collection is a not-found condition.
//! Search is a case-insensitive substring match; zero matches is a
//! normal empty success.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use validator::Validate;

use encore_core::error::CoreError;
use encore_core::pagination::{page_offset, page_out_of_range, QUESTIONS_PER_PAGE};
use encore_core::types::DbId;
use encore_db::models::category::Category;
use encore_db::models::question::{CreateQuestion, Question};
use encore_db::repositories::{CategoryRepo, QuestionRepo};

use crate::error::{AppError, AppResult};
use crate::query::{PageParams, SearchTermBody};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Response for `GET /categories`.
#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub success: bool,
    pub categories: Vec<Category>,
}

/// Response for `GET /questions`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub categories: Vec<Category>,
}

/// Response for `GET /categories/{id}/questions`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub current_category: DbId,
}

/// Response for `POST /questions/search`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    /// Category of the first match, absent when nothing matched.
    pub current_category: Option<DbId>,
}

/// Response for `POST /questions/add`.
#[derive(Debug, Serialize)]
pub struct QuestionCreatedResponse {
    pub success: bool,
    pub question: Question,
}

/// Response for `DELETE /questions/{id}`.
#[derive(Debug, Serialize)]
pub struct QuestionDeleteResponse {
    pub success: bool,
    pub deleted: DbId,
}

/// Resolve and bounds-check a page index into a row offset.
fn offset_for(params: &PageParams) -> Result<(i64, i64), AppError> {
    let page = params.page();
    let offset = page_offset(page, QUESTIONS_PER_PAGE).map_err(AppError::BadRequest)?;
    Ok((page, offset))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /categories
///
/// All trivia categories.
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list(&state.pool).await?;

    Ok(Json(CategoryListResponse {
        success: true,
        categories,
    }))
}

/// GET /questions?page=
///
/// One page of questions plus the total count and the category listing.
/// A page beyond the last available page yields 404.
pub async fn list_questions(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let (page, offset) = offset_for(&params)?;

    let questions = QuestionRepo::list_page(&state.pool, QUESTIONS_PER_PAGE, offset).await?;
    if page_out_of_range(questions.len()) {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Question page",
            id: page,
        }));
    }

    let total_questions = QuestionRepo::count_all(&state.pool).await?;
    let categories = CategoryRepo::list(&state.pool).await?;

    Ok(Json(QuestionListResponse {
        success: true,
        questions,
        total_questions,
        categories,
    }))
}

/// GET /categories/{id}/questions?page=
///
/// One page of a category's questions. 404 for an unknown category or a
/// page beyond the category's last.
pub async fn list_questions_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<DbId>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    CategoryRepo::find_by_id(&state.pool, category_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Category",
            id: category_id,
        })?;

    let (page, offset) = offset_for(&params)?;

    let questions =
        QuestionRepo::list_page_by_category(&state.pool, category_id, QUESTIONS_PER_PAGE, offset)
            .await?;
    if page_out_of_range(questions.len()) {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Question page",
            id: page,
        }));
    }

    let total_questions = QuestionRepo::count_by_category(&state.pool, category_id).await?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions,
        total_questions,
        current_category: category_id,
    }))
}

/// POST /questions/search
///
/// Case-insensitive substring search on question text. Zero matches is
/// a normal empty success.
pub async fn search_questions(
    State(state): State<AppState>,
    Json(body): Json<SearchTermBody>,
) -> AppResult<impl IntoResponse> {
    let questions = QuestionRepo::search(&state.pool, &body.search_term).await?;

    Ok(Json(QuestionSearchResponse {
        success: true,
        total_questions: questions.len() as i64,
        current_category: questions.first().map(|q| q.category_id),
        questions,
    }))
}

/// POST /questions/add
///
/// Create a new question. The category must already exist.
pub async fn add_question(
    State(state): State<AppState>,
    Json(input): Json<CreateQuestion>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    CategoryRepo::find_by_id(&state.pool, input.category_id)
        .await?
        .ok_or_else(|| {
            CoreError::Unprocessable(format!(
                "Category {} does not exist",
                input.category_id
            ))
        })?;

    let question = QuestionRepo::create(&state.pool, &input).await?;

    tracing::info!(
        question_id = question.id,
        category_id = question.category_id,
        "Question added"
    );

    Ok((
        StatusCode::CREATED,
        Json(QuestionCreatedResponse {
            success: true,
            question,
        }),
    ))
}

/// DELETE /questions/{id}
///
/// Delete a question. 404 if it does not exist.
pub async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = QuestionRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Question",
            id,
        }));
    }

    tracing::info!(question_id = id, "Question deleted");

    Ok(Json(QuestionDeleteResponse {
        success: true,
        deleted: id,
    }))
}
