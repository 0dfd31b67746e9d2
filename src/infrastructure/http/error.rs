//! HTTP Error Handling

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::application::ApplicationError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: String,
    pub details: Vec<Value>,
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 请求体或路径参数不符合参数 schema
    Validation { message: String, details: Vec<Value> },
    NotFound(String),
    /// 上游调用失败
    BadGateway(String),
    Internal(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::Validation {
            details: vec![json!({ "message": message.clone() })],
            message,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let response = match self {
            ApiError::Validation { message, details } => {
                tracing::warn!(status = status.as_u16(), error = %message, "Validation failed");
                ErrorResponse {
                    code: "validation_error",
                    message,
                    details,
                }
            }
            ApiError::NotFound(msg) => {
                tracing::warn!(status = status.as_u16(), error = %msg, "Resource not found");
                ErrorResponse {
                    code: "not_found",
                    message: msg,
                    details: Vec::new(),
                }
            }
            ApiError::BadGateway(msg) => {
                tracing::error!(status = status.as_u16(), error = %msg, "Upstream failure");
                ErrorResponse {
                    code: "upstream_error",
                    message: msg,
                    details: Vec::new(),
                }
            }
            ApiError::Internal(msg) => {
                tracing::error!(status = status.as_u16(), error = %msg, "Internal server error");
                ErrorResponse {
                    code: "internal_error",
                    message: msg,
                    details: Vec::new(),
                }
            }
        };

        (status, Json(response)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound(resource) => {
                ApiError::NotFound(format!("Resource not found: {}", resource))
            }
            ApplicationError::Upstream(err) => ApiError::BadGateway(err.to_string()),
            ApplicationError::Decode(err) => ApiError::Internal(err.to_string()),
        }
    }
}

/// 请求体的语法错误、缺少 JSON Content-Type 与字段错误一样按校验失败处理
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::validation(rejection.body_text())
    }
}
