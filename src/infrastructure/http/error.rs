//! HTTP Error Handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub errno: u16,
    pub error: String,
    pub data: Option<()>,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            errno: status.as_u16(),
            error: error.into(),
            data: None,
        }
    }
}

/// 500 响应体中的固定提示
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = match self {
            ApiError::NotFound(msg) => {
                tracing::warn!(status = status.as_u16(), error = %msg, "Resource not found");
                msg
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(status = status.as_u16(), error = %msg, "Bad request");
                msg
            }
            ApiError::Internal(msg) => {
                // 细节只进日志，不返回给客户端
                tracing::error!(status = status.as_u16(), error = %msg, "Internal server error");
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        };

        (status, Json(ErrorResponse::new(status, msg))).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound { resource_type, id } => {
                ApiError::NotFound(format!("{} not found: {}", resource_type, id))
            }
            ApplicationError::ValidationError(msg) => ApiError::BadRequest(msg),
            ApplicationError::StorageUnavailable(msg) => ApiError::Internal(msg),
            ApplicationError::RepositoryError(msg) => ApiError::Internal(msg),
        }
    }
}
