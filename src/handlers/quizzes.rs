use std::collections::HashSet;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::{
    db::Question,
    extractors::{deserialize_string_or_i64, JsonBody},
    names, quiz,
    rejections::{AppError, ResultExt},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route(names::QUIZZES_URL, post(next_question))
}

#[derive(Deserialize)]
struct QuizBody {
    #[serde(default)]
    quiz_category: Option<QuizCategory>,
    #[serde(default)]
    previous_questions: Vec<i64>,
}

/// The frontend sends `{id, type}`; only the id matters here.
#[derive(Deserialize)]
struct QuizCategory {
    #[serde(deserialize_with = "deserialize_string_or_i64")]
    id: i64,
}

#[derive(Serialize)]
struct QuizResponse {
    success: bool,
    question: Option<Question>,
}

async fn next_question(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<QuizBody>,
) -> Result<Json<QuizResponse>, AppError> {
    let category_id = body
        .quiz_category
        .map(|c| c.id)
        .filter(|&id| id != names::ALL_CATEGORIES_ID);

    if let Some(id) = category_id {
        let exists = state
            .db
            .category_exists(id)
            .await
            .reject("could not check quiz category")?;
        if !exists {
            return Err(AppError::NotFound("unknown quiz category"));
        }
    }

    let candidates = state
        .db
        .quiz_candidates(category_id)
        .await
        .reject("could not get quiz questions")?;

    let previous: HashSet<i64> = body.previous_questions.into_iter().collect();
    let question = quiz::next_question(candidates, &previous, &mut rand::thread_rng());

    if question.is_none() {
        tracing::debug!("quiz exhausted after {} questions", previous.len());
    }

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
