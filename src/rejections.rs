use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::names;

/// Every failure a handler can report. The `&'static str` is a log detail;
/// clients only ever see the fixed envelope for the status code.
#[derive(Debug)]
pub enum AppError {
    BadRequest(&'static str),
    NotFound(&'static str),
    MethodNotAllowed,
    Unprocessable(&'static str),
    Internal(&'static str),
}

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: u16,
    pub message: &'static str,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn envelope(&self) -> ErrorEnvelope {
        let message = match self {
            AppError::BadRequest(_) => names::BAD_REQUEST_MESSAGE,
            AppError::NotFound(_) => names::NOT_FOUND_MESSAGE,
            AppError::MethodNotAllowed => names::METHOD_NOT_ALLOWED_MESSAGE,
            AppError::Unprocessable(_) => names::UNPROCESSABLE_MESSAGE,
            AppError::Internal(_) => names::INTERNAL_ERROR_MESSAGE,
        };

        ErrorEnvelope {
            success: false,
            error: self.status_code().as_u16(),
            message,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Internal(detail) => tracing::error!("internal error: {detail}"),
            AppError::BadRequest(detail)
            | AppError::NotFound(detail)
            | AppError::Unprocessable(detail) => {
                tracing::debug!(status = self.status_code().as_u16(), "{detail}")
            }
            AppError::MethodNotAllowed => tracing::debug!("method not allowed"),
        }

        (self.status_code(), Json(self.envelope())).into_response()
    }
}

/// Maps store failures onto [`AppError::Internal`], logging the full report.
pub trait ResultExt<T> {
    fn reject(self, message: &'static str) -> Result<T, AppError>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for Result<T, E> {
    fn reject(self, message: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{message}: {e:?}");
            AppError::Internal(message)
        })
    }
}

/// Answers unmatched routes with the not-found envelope.
pub async fn fallback() -> AppError {
    AppError::NotFound("no route matched")
}

/// Answers a known route called with the wrong method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Turns a handler panic into the 500 envelope instead of a dropped connection.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    tracing::error!("handler panicked: {detail}");

    AppError::Internal("handler panicked").into_response()
}
