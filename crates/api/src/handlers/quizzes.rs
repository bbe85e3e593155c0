//! Handler for the quiz `POST /quizzes` endpoint.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use encore_core::error::CoreError;
use encore_core::trivia::{pick_next_question, ALL_CATEGORIES};
use encore_core::types::DbId;
use encore_db::models::question::Question;
use encore_db::repositories::{CategoryRepo, QuestionRepo};

use crate::error::AppResult;
use crate::state::AppState;

/// Reference to a quiz category by id. Id 0 means "all categories".
#[derive(Debug, Deserialize)]
pub struct QuizCategoryRef {
    pub id: DbId,
}

/// Request body for `POST /quizzes`.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    /// Ids of questions the player has already been asked.
    #[serde(default)]
    pub previous_questions: Vec<DbId>,
    pub quiz_category: QuizCategoryRef,
}

/// Response for `POST /quizzes`. `question` is null once the chosen
/// category is exhausted.
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

/// POST /quizzes
///
/// Pick the next question uniformly at random from the chosen category,
/// excluding everything the player has already seen.
pub async fn play_quiz(
    State(state): State<AppState>,
    Json(input): Json<QuizRequest>,
) -> AppResult<impl IntoResponse> {
    let category_id = input.quiz_category.id;

    let candidates = if category_id == ALL_CATEGORIES {
        QuestionRepo::ids_all(&state.pool).await?
    } else {
        CategoryRepo::find_by_id(&state.pool, category_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Category",
                id: category_id,
            })?;
        QuestionRepo::ids_in_category(&state.pool, category_id).await?
    };

    let question = match pick_next_question(&candidates, &input.previous_questions) {
        Some(id) => QuestionRepo::find_by_id(&state.pool, id).await?,
        None => None,
    };

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
