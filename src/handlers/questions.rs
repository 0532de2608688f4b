use std::collections::BTreeMap;

use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::{
    db::{NewQuestion, Question},
    extractors::{deserialize_string_or_i64, JsonBody, Pagination, PathId},
    names,
    rejections::{AppError, ResultExt},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::QUESTIONS_URL, get(list_questions).post(create_question))
        .route(names::QUESTION_URL, delete(delete_question))
        .route(names::SEARCH_QUESTIONS_URL, post(search_questions))
}

#[derive(Serialize)]
struct QuestionsResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: i64,
    categories: BTreeMap<i64, String>,
}

async fn list_questions(
    State(state): State<AppState>,
    Pagination(page): Pagination,
) -> Result<Json<QuestionsResponse>, AppError> {
    let (questions, total_questions) = state
        .db
        .questions_page(page.offset(), page.limit())
        .await
        .reject("could not get questions")?;

    // Only an empty first page is an error; later pages may simply run out.
    if questions.is_empty() && page.is_first() {
        return Err(AppError::NotFound("no questions stored"));
    }

    let categories = state
        .db
        .categories()
        .await
        .reject("could not get categories")?;

    Ok(Json(QuestionsResponse {
        success: true,
        questions,
        total_questions,
        categories,
    }))
}

#[derive(Deserialize)]
struct CreateQuestionBody {
    question: String,
    answer: String,
    #[serde(deserialize_with = "deserialize_string_or_i64")]
    category: i64,
    #[serde(deserialize_with = "deserialize_string_or_i64")]
    difficulty: i64,
}

impl CreateQuestionBody {
    fn validate(self) -> Result<NewQuestion, AppError> {
        if self.question.trim().is_empty() || self.answer.trim().is_empty() {
            return Err(AppError::Unprocessable("question and answer must not be blank"));
        }

        // Only the blank check trims; the text is stored as sent.
        Ok(NewQuestion {
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        })
    }
}

#[derive(Serialize)]
struct CreatedResponse {
    success: bool,
    message: &'static str,
    created: i64,
}

async fn create_question(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateQuestionBody>,
) -> Result<Json<CreatedResponse>, AppError> {
    let new_question = body.validate()?;

    let created = state
        .db
        .create_question(&new_question)
        .await
        .reject("could not create question")?
        .ok_or(AppError::Unprocessable("category does not exist"))?;

    Ok(Json(CreatedResponse {
        success: true,
        message: names::QUESTION_CREATED_MESSAGE,
        created,
    }))
}

#[derive(Serialize)]
struct DeletedResponse {
    success: bool,
    deleted: i64,
}

async fn delete_question(
    State(state): State<AppState>,
    PathId(question_id): PathId,
) -> Result<Json<DeletedResponse>, AppError> {
    let deleted = state
        .db
        .delete_question(question_id)
        .await
        .reject("could not delete question")?;

    if !deleted {
        return Err(AppError::NotFound("question does not exist"));
    }

    tracing::info!("question {question_id} deleted");

    Ok(Json(DeletedResponse {
        success: true,
        deleted: question_id,
    }))
}

#[derive(Deserialize)]
struct SearchBody {
    #[serde(rename = "searchTerm")]
    search_term: String,
}

#[derive(Serialize)]
struct SearchResponse {
    success: bool,
    question: Vec<Question>,
    total_questions: usize,
}

async fn search_questions(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<SearchBody>,
) -> Result<Json<SearchResponse>, AppError> {
    let questions = state
        .db
        .search_questions(&body.search_term)
        .await
        .reject("could not search questions")?;

    Ok(Json(SearchResponse {
        success: true,
        total_questions: questions.len(),
        question: questions,
    }))
}
