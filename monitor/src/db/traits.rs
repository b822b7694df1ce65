//! Repository traitパターン定義
//!
//! インベントリ操作を抽象化し、シード処理やAPIをDBなしでテストできるようにする。
//! 各traitは`projects` / `servers`モジュールのフリー関数に対応する。

use async_trait::async_trait;
use launch_monitor_common::types::{NewServer, Project, Server};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// ProjectRepository
// ---------------------------------------------------------------------------

/// プロジェクトCRUD操作のRepository trait
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// プロジェクトを作成
    async fn create_project(&self, name: &str) -> Result<Project, sqlx::Error>;
    /// IDでプロジェクトを取得
    async fn get_project(&self, id: i64) -> Result<Option<Project>, sqlx::Error>;
    /// 名前でプロジェクトを検索
    async fn find_project_by_name(&self, name: &str) -> Result<Option<Project>, sqlx::Error>;
    /// プロジェクトを更新
    async fn update_project(&self, project: &Project) -> Result<bool, sqlx::Error>;
    /// プロジェクト一覧を取得
    async fn list_projects(&self) -> Result<Vec<Project>, sqlx::Error>;
}

// ---------------------------------------------------------------------------
// ServerRepository
// ---------------------------------------------------------------------------

/// サーバーCRUD操作のRepository trait
#[async_trait]
pub trait ServerRepository: Send + Sync {
    /// サーバーを登録
    async fn create_server(&self, server: &NewServer) -> Result<Server, sqlx::Error>;
    /// IDでサーバーを取得
    async fn get_server(&self, id: i64) -> Result<Option<Server>, sqlx::Error>;
    /// サーバーを更新
    async fn update_server(&self, server: &Server) -> Result<bool, sqlx::Error>;
    /// プロジェクトに所属するサーバー一覧を取得
    async fn list_servers_by_project(&self, project_id: i64) -> Result<Vec<Server>, sqlx::Error>;
}

// ===========================================================================
// SqlitePool implementations
// ===========================================================================

#[async_trait]
impl ProjectRepository for SqlitePool {
    async fn create_project(&self, name: &str) -> Result<Project, sqlx::Error> {
        super::projects::create_project(self, name).await
    }

    async fn get_project(&self, id: i64) -> Result<Option<Project>, sqlx::Error> {
        super::projects::get_project(self, id).await
    }

    async fn find_project_by_name(&self, name: &str) -> Result<Option<Project>, sqlx::Error> {
        super::projects::find_project_by_name(self, name).await
    }

    async fn update_project(&self, project: &Project) -> Result<bool, sqlx::Error> {
        super::projects::update_project(self, project).await
    }

    async fn list_projects(&self) -> Result<Vec<Project>, sqlx::Error> {
        super::projects::list_projects(self).await
    }
}

#[async_trait]
impl ServerRepository for SqlitePool {
    async fn create_server(&self, server: &NewServer) -> Result<Server, sqlx::Error> {
        super::servers::create_server(self, server).await
    }

    async fn get_server(&self, id: i64) -> Result<Option<Server>, sqlx::Error> {
        super::servers::get_server(self, id).await
    }

    async fn update_server(&self, server: &Server) -> Result<bool, sqlx::Error> {
        super::servers::update_server(self, server).await
    }

    async fn list_servers_by_project(&self, project_id: i64) -> Result<Vec<Server>, sqlx::Error> {
        super::servers::list_servers_by_project(self, project_id).await
    }
}
