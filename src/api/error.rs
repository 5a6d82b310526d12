use crate::error::ReceiptError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 接口错误 (映射为 HTTP 状态码)
#[derive(Debug, Error)]
pub enum ApiError {
    /// 请求体无法解析为收据 (400)
    #[error("Invalid request body: {0}")]
    Decode(String),

    #[error(transparent)]
    Receipt(#[from] ReceiptError),
}

/// 错误响应体
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Decode(_) => StatusCode::BAD_REQUEST,
            ApiError::Receipt(ReceiptError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Receipt(ReceiptError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Receipt(ReceiptError::DuplicateId(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Decode(_) => "BAD_REQUEST",
            ApiError::Receipt(ReceiptError::Validation(_)) => "INVALID_RECEIPT",
            ApiError::Receipt(ReceiptError::NotFound(_)) => "NOT_FOUND",
            ApiError::Receipt(ReceiptError::DuplicateId(_)) => "INTERNAL_ERROR",
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Decode(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("Request rejected ({}): {}", status, self);
        }

        let body = ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
