use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::error_payload::ErrorPayload;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("An error occurred while processing the request")]
    RequestError(#[from] reqwest::Error),

    #[error("An error occurred while accessing the database")]
    DatabaseError(#[from] sqlx::Error),

    #[error("An error occurred while accessing the cache")]
    RedisError(#[from] redis::RedisError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl AppError {
    pub fn code(&self) -> StatusCode {
        match self {
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::RequestError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::RedisError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
        }
    }

    fn error_type(&self) -> String {
        match self {
            AppError::DatabaseError(_) => "DATABASE_ERROR",
            AppError::RequestError(_) => "REQUEST_ERROR",
            AppError::RedisError(_) => "REDIS_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
        }
        .to_string()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.code();
        let error_response = ErrorPayload {
            message: self.to_string(),
            code: status.as_u16(),
            r#type: self.error_type(),
            details: None,
        };

        (status, Json(error_response)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_variants_to_status_codes() {
        assert_eq!(
            AppError::BadRequest("mood".to_string()).code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("user".to_string()).code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Conflict("username".to_string()).code(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn redis_errors_convert_and_hide_details() {
        let error: AppError =
            redis::RedisError::from((redis::ErrorKind::IoError, "connection refused")).into();
        assert_eq!(error.code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.error_type(), "REDIS_ERROR");
        assert_eq!(error.to_string(), "An error occurred while accessing the cache");
    }

    #[test]
    fn error_type_is_screaming_snake_case() {
        assert_eq!(
            AppError::BadRequest(String::new()).error_type(),
            "BAD_REQUEST"
        );
        assert_eq!(AppError::NotFound(String::new()).error_type(), "NOT_FOUND");
    }
}
