//! REST APIハンドラー
//!
//! ステータス確認とインベントリ参照API

pub mod error;
pub mod projects;
pub mod status;

use crate::AppState;
use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// APIルーターを作成
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/check_status", get(status::check_status))
        .route("/api/projects", get(projects::list_projects))
        .route("/api/projects/:id", get(projects::get_project))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
