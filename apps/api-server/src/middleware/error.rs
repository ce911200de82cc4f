//! Error handling - maps failures to `{error, message?}` responses.

use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode, web};
use blog_shared::ErrorResponse;
use std::fmt;

/// Application-level error type covering the four failure classes:
/// invalid payload, malformed path parameter, missing row, and
/// storage failure.
#[derive(Debug)]
pub enum AppError {
    Validation(Vec<String>),
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(errors) => write!(f, "Validation errors: {:?}", errors),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::Validation(errors) => ErrorResponse::validation(errors),
            AppError::BadRequest(msg) => ErrorResponse::bad_request(msg.clone()),
            AppError::NotFound(msg) => ErrorResponse::not_found(msg.clone()),
            AppError::Internal(msg) => {
                // Log the detail; the client only sees an opaque 500.
                tracing::error!("Internal error: {}", msg);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

// Conversion from store errors
impl From<blog_core::error::RepoError> for AppError {
    fn from(err: blog_core::error::RepoError) -> Self {
        match err {
            blog_core::error::RepoError::NotFound => {
                AppError::NotFound("Resource not found".to_string())
            }
            blog_core::error::RepoError::Connection(msg) => {
                AppError::Internal(format!("database connection error: {msg}"))
            }
            blog_core::error::RepoError::Query(msg) => {
                AppError::Internal(format!("database query error: {msg}"))
            }
        }
    }
}

/// JSON extractor config that keeps malformed-body rejections in the
/// standard error shape instead of actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        AppError::BadRequest(err.to_string()).into()
    })
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
