//! Error handling - RFC 7807 compliant responses.

use std::fmt;

use actix_web::{HttpResponse, ResponseError, error::InternalError, http::StatusCode, web};

use pulse_core::StoreError;
use pulse_shared::ErrorResponse;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail.as_str()),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail.as_str()),
            AppError::Internal(detail) => {
                // The real cause stays in the logs; the body is opaque.
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

/// Conversion used on read-only paths. Mutating handlers build their own
/// mapping because each endpoint owns its wording and status policy.
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => AppError::NotFound("Resource not found".to_string()),
            StoreError::Connection(msg) => AppError::Internal(msg),
            StoreError::Query(msg) => AppError::Internal(msg),
            StoreError::Constraint(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

/// JSON body extractor configuration. A malformed or mistyped body becomes
/// a structured 400 whose detail names the offending field.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let detail = err.to_string();
        InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(ErrorResponse::bad_request(detail)),
        )
        .into()
    })
}

/// Query string extractor configuration, same 400 shape as bodies.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let detail = err.to_string();
        InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(ErrorResponse::bad_request(detail)),
        )
        .into()
    })
}

/// Path segment extractor configuration, same 400 shape as bodies.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        let detail = err.to_string();
        InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(ErrorResponse::bad_request(detail)),
        )
        .into()
    })
}
