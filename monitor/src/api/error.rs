//! APIエラーレスポンス型
//!
//! axum用の共通エラーハンドリング

use axum::{response::IntoResponse, Json};
use launch_monitor_common::error::MonitorError;
use serde_json::json;

use crate::probe::ProbeError;

/// Axum用のエラーレスポンス型
#[derive(Debug)]
pub struct AppError(pub MonitorError);

impl From<MonitorError> for AppError {
    fn from(err: MonitorError) -> Self {
        AppError(err)
    }
}

impl From<ProbeError> for AppError {
    fn from(err: ProbeError) -> Self {
        AppError(err.into())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError(MonitorError::Database(err.to_string()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.0.status_code();
        // 詳細はログのみに出し、レスポンスには外部向けメッセージを返す
        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        } else {
            tracing::debug!(error = %self.0, "Request rejected");
        }

        let payload = json!({
            "error": self.0.external_message()
        });

        (status, Json(payload)).into_response()
    }
}
