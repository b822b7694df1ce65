//! ステータス確認APIハンドラー

use axum::{
    extract::{Query, State},
    Json,
};
use launch_monitor_common::protocol::{CheckStatusQuery, CheckStatusResponse};

use super::error::AppError;
use crate::AppState;

/// GET /check_status - 対象URLの稼働状況を確認
///
/// `url`クエリがあればそのURLを、無ければ設定の`target_url`をプローブする。
/// リクエストごとに1回だけプローブし、結果は共有しない。
pub async fn check_status(
    State(state): State<AppState>,
    Query(query): Query<CheckStatusQuery>,
) -> Result<Json<CheckStatusResponse>, AppError> {
    let target = query
        .url
        .unwrap_or_else(|| state.config.target_url.clone());

    let report = state.probe.check_status(&target).await?;
    tracing::info!(url = %report.observed_url, result = %report.status, "Status checked");

    Ok(Json(report.into()))
}
