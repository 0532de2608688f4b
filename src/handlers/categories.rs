use std::collections::BTreeMap;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::{
    db::Question,
    extractors::{Pagination, PathId},
    names,
    rejections::{AppError, ResultExt},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::CATEGORIES_URL, get(list_categories))
        .route(names::CATEGORY_QUESTIONS_URL, get(category_questions))
}

#[derive(Serialize)]
struct CategoriesResponse {
    success: bool,
    categories: BTreeMap<i64, String>,
}

async fn list_categories(State(state): State<AppState>) -> Result<Json<CategoriesResponse>, AppError> {
    let categories = state
        .db
        .categories()
        .await
        .reject("could not get categories")?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

#[derive(Serialize)]
struct CategoryQuestionsResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: i64,
}

async fn category_questions(
    State(state): State<AppState>,
    PathId(category_id): PathId,
    Pagination(page): Pagination,
) -> Result<Json<CategoryQuestionsResponse>, AppError> {
    let exists = state
        .db
        .category_exists(category_id)
        .await
        .reject("could not check category")?;

    if !exists {
        return Err(AppError::NotFound("unknown category"));
    }

    let questions = state
        .db
        .questions_by_category(category_id)
        .await
        .reject("could not get questions for category")?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: page.slice(&questions).to_vec(),
        total_questions: questions.len(),
        current_category: category_id,
    }))
}
