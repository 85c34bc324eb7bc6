//! HTTP Error Handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// 统一错误响应格式，errno 与 HTTP 状态码一致
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub errno: i32,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(errno: i32, error: impl Into<String>) -> Self {
        Self {
            errno,
            error: error.into(),
        }
    }
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Validation(String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let errno = i32::from(status.as_u16());

        let message = match self {
            ApiError::NotFound(msg) => {
                tracing::warn!(errno, error = %msg, "Resource not found");
                msg
            }
            ApiError::Validation(msg) => {
                tracing::warn!(errno, error = %msg, "Validation failed");
                msg
            }
            ApiError::Internal(msg) => {
                // 存储层细节只写日志，不返回给客户端
                tracing::error!(errno, error = %msg, "Operation failed");
                "Operation failed".to_string()
            }
        };

        (status, Json(ErrorResponse::new(errno, message))).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound { .. } => ApiError::NotFound(e.to_string()),
            ApplicationError::ValidationError(msg) => ApiError::Validation(msg),
            ApplicationError::RepositoryError(msg) => ApiError::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_errors_map_to_status() {
        let not_found: ApiError = ApplicationError::not_found("List", "abc").into();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let invalid: ApiError = ApplicationError::validation("empty").into();
        assert_eq!(invalid.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let failed: ApiError = ApplicationError::RepositoryError("boom".into()).into();
        assert_eq!(failed.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_not_found_message_names_resource() {
        match ApiError::from(ApplicationError::not_found("List", "abc")) {
            ApiError::NotFound(msg) => assert_eq!(msg, "List not found: abc"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
