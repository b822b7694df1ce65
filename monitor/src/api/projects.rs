//! インベントリAPIハンドラー（読み取り専用）

use axum::{
    extract::{Path, State},
    Json,
};
use launch_monitor_common::error::MonitorError;
use launch_monitor_common::protocol::{ProjectListResponse, ProjectWithServers};

use super::error::AppError;
use crate::db::traits::{ProjectRepository, ServerRepository};
use crate::AppState;

/// GET /api/projects - プロジェクト一覧（所属サーバー付き）
pub async fn list_projects(
    State(state): State<AppState>,
) -> Result<Json<ProjectListResponse>, AppError> {
    let pool = &state.db_pool;
    let projects = pool.list_projects().await?;

    let mut entries = Vec::with_capacity(projects.len());
    for project in projects {
        let servers = pool.list_servers_by_project(project.id).await?;
        entries.push(ProjectWithServers { project, servers });
    }

    Ok(Json(ProjectListResponse { projects: entries }))
}

/// GET /api/projects/:id - プロジェクト詳細（所属サーバー付き）
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ProjectWithServers>, AppError> {
    let pool = &state.db_pool;
    let project = pool
        .get_project(id)
        .await?
        .ok_or_else(|| MonitorError::NotFound(format!("project {}", id)))?;
    let servers = pool.list_servers_by_project(project.id).await?;

    Ok(Json(ProjectWithServers { project, servers }))
}
