//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! `MonitorError`は`external_message()`と`status_code()`を提供し、
//! 内部情報を含まないAPIエラーレスポンスを生成できます。

use axum::http::StatusCode;
use thiserror::Error;

/// Common layer error type
#[derive(Debug, Error)]
pub enum CommonError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<config::ConfigError> for CommonError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

/// launch monitor error type
#[derive(Debug, Error)]
pub enum MonitorError {
    /// Common layer error
    #[error(transparent)]
    Common(#[from] CommonError),

    /// Malformed probe target
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Http(String),
}

impl MonitorError {
    /// Returns a safe error message for external clients.
    ///
    /// Use the `Display` implementation for server logs; it carries
    /// hostnames, ports and driver messages.
    pub fn external_message(&self) -> &'static str {
        match self {
            Self::Common(CommonError::Validation(_)) => "Invalid request",
            Self::Common(_) => "Request error",
            Self::InvalidUrl(_) => "Invalid URL",
            Self::NotFound(_) => "Not found",
            Self::Database(_) => "Database error",
            Self::Http(_) => "Backend service unavailable",
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Common(CommonError::Validation(_)) => StatusCode::BAD_REQUEST,
            Self::Common(CommonError::Serialization(_)) => StatusCode::BAD_REQUEST,
            Self::Common(CommonError::Config(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidUrl(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Http(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

/// Result type alias (Common)
pub type CommonResult<T> = Result<T, CommonError>;
