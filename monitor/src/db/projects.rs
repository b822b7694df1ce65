//! プロジェクトデータベース操作

use chrono::Utc;
use launch_monitor_common::types::Project;
use sqlx::SqlitePool;

/// プロジェクトを作成
///
/// 名前は一意。重複時はUNIQUE制約違反のエラーを返す。
pub async fn create_project(pool: &SqlitePool, name: &str) -> Result<Project, sqlx::Error> {
    let now = Utc::now();
    let timestamp = now.to_rfc3339();

    let result = sqlx::query(
        r#"
        INSERT INTO projects (name, created_at, updated_at)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(name)
    .bind(&timestamp)
    .bind(&timestamp)
    .execute(pool)
    .await?;

    Ok(Project {
        id: result.last_insert_rowid(),
        name: name.to_string(),
        created_at: now,
        updated_at: now,
    })
}

/// IDでプロジェクトを取得
pub async fn get_project(pool: &SqlitePool, id: i64) -> Result<Option<Project>, sqlx::Error> {
    let row = sqlx::query_as::<_, ProjectRow>(
        r#"
        SELECT id, name, created_at, updated_at
        FROM projects
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| r.into()))
}

/// 名前でプロジェクトを検索
pub async fn find_project_by_name(
    pool: &SqlitePool,
    name: &str,
) -> Result<Option<Project>, sqlx::Error> {
    let row = sqlx::query_as::<_, ProjectRow>(
        r#"
        SELECT id, name, created_at, updated_at
        FROM projects
        WHERE name = ?
        "#,
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| r.into()))
}

/// プロジェクトを更新（updated_atは現在時刻に更新）
pub async fn update_project(pool: &SqlitePool, project: &Project) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE projects SET name = ?, updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(&project.name)
    .bind(Utc::now().to_rfc3339())
    .bind(project.id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// プロジェクト一覧を取得（ID昇順）
pub async fn list_projects(pool: &SqlitePool) -> Result<Vec<Project>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ProjectRow>(
        r#"
        SELECT id, name, created_at, updated_at
        FROM projects
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|r| r.into()).collect())
}

#[derive(sqlx::FromRow)]
struct ProjectRow {
    id: i64,
    name: String,
    created_at: String,
    updated_at: String,
}

fn parse_timestamp(value: &str) -> chrono::DateTime<Utc> {
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            id: row.id,
            name: row.name,
            created_at: parse_timestamp(&row.created_at),
            updated_at: parse_timestamp(&row.updated_at),
        }
    }
}
