//! サーバーデータベース操作

use launch_monitor_common::types::{NewServer, Server};
use sqlx::SqlitePool;

/// サーバーを登録
///
/// `project_id`が存在しないプロジェクトを指す場合は外部キー制約違反になる。
pub async fn create_server(pool: &SqlitePool, server: &NewServer) -> Result<Server, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO servers (url, status, version, project_id)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&server.url)
    .bind(server.status)
    .bind(&server.version)
    .bind(server.project_id)
    .execute(pool)
    .await?;

    Ok(Server {
        id: result.last_insert_rowid(),
        url: server.url.clone(),
        status: server.status,
        version: server.version.clone(),
        project_id: server.project_id,
    })
}

/// IDでサーバーを取得
pub async fn get_server(pool: &SqlitePool, id: i64) -> Result<Option<Server>, sqlx::Error> {
    sqlx::query_as::<_, ServerRow>(
        r#"
        SELECT id, url, status, version, project_id
        FROM servers
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map(|row| row.map(Into::into))
}

/// サーバーを更新
pub async fn update_server(pool: &SqlitePool, server: &Server) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE servers SET url = ?, status = ?, version = ?, project_id = ?
        WHERE id = ?
        "#,
    )
    .bind(&server.url)
    .bind(server.status)
    .bind(&server.version)
    .bind(server.project_id)
    .bind(server.id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// プロジェクトに所属するサーバー一覧を取得
pub async fn list_servers_by_project(
    pool: &SqlitePool,
    project_id: i64,
) -> Result<Vec<Server>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ServerRow>(
        r#"
        SELECT id, url, status, version, project_id
        FROM servers
        WHERE project_id = ?
        ORDER BY id ASC
        "#,
    )
    .bind(project_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Into::into).collect())
}

#[derive(sqlx::FromRow)]
struct ServerRow {
    id: i64,
    url: Option<String>,
    status: Option<bool>,
    version: Option<String>,
    project_id: Option<i64>,
}

impl From<ServerRow> for Server {
    fn from(row: ServerRow) -> Self {
        Server {
            id: row.id,
            url: row.url,
            status: row.status,
            version: row.version,
            project_id: row.project_id,
        }
    }
}
