pub const CATEGORIES_URL: &str = "/categories";
pub const CATEGORY_QUESTIONS_URL: &str = "/categories/{id}/questions";
pub const QUESTIONS_URL: &str = "/questions";
pub const QUESTION_URL: &str = "/questions/{id}";
pub const SEARCH_QUESTIONS_URL: &str = "/questions/search";
pub const QUIZZES_URL: &str = "/quizzes";

pub fn question_url(question_id: i64) -> String {
    format!("/questions/{question_id}")
}

pub fn category_questions_url(category_id: i64) -> String {
    format!("/categories/{category_id}/questions")
}

// Pagination
pub const QUESTIONS_PER_PAGE: i64 = 10;

// Quiz category id meaning "every category"
pub const ALL_CATEGORIES_ID: i64 = 0;

// Response messages
pub const QUESTION_CREATED_MESSAGE: &str = "Question successfully created!";
pub const BAD_REQUEST_MESSAGE: &str = "Bad request.";
pub const NOT_FOUND_MESSAGE: &str = "Resource not found.";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed.";
pub const UNPROCESSABLE_MESSAGE: &str = "Request was unprocessable.";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error.";
