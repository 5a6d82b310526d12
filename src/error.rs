//! 领域错误类型

use thiserror::Error;

/// 收据字段校验失败 (提交时即拒绝, 不会进入存储)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: '{value}' is not a decimal amount")]
    InvalidAmount { field: String, value: String },

    #[error("{field}: amount '{value}' must not be negative")]
    NegativeAmount { field: String, value: String },

    #[error("purchaseDate: '{0}' is not a YYYY-MM-DD date")]
    InvalidDate(String),

    #[error("purchaseTime: '{0}' is not a HH:MM time")]
    InvalidTime(String),
}

/// 收据服务错误
#[derive(Debug, Error)]
pub enum ReceiptError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No receipt found for id {0}")]
    NotFound(String),

    #[error("Receipt id {0} already exists")]
    DuplicateId(String),
}
