//! 初期データ投入
//!
//! デフォルトのプロジェクト一覧を名前で検索し、無ければ作成する。
//! 何度実行しても同じ結果になる。

use serde::Serialize;
use tracing::{debug, info};

use crate::db::traits::ProjectRepository;

/// デフォルトのプロジェクト名
pub const DEFAULT_PROJECTS: [&str; 7] = [
    "Astellas",
    "Merck",
    "J&J",
    "Lupin",
    "Fresenius",
    "Leo",
    "Edwards",
];

/// シード結果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    /// 新規作成したプロジェクト数
    pub created: usize,
    /// 既に存在していたプロジェクト数
    pub unchanged: usize,
}

/// 指定した名前のプロジェクトを投入する
///
/// 既存のプロジェクトは変更しない（属性が同じため更新不要）。
pub async fn seed_projects<R>(repo: &R, names: &[&str]) -> Result<SeedSummary, sqlx::Error>
where
    R: ProjectRepository + ?Sized,
{
    let mut summary = SeedSummary::default();

    for name in names {
        match repo.find_project_by_name(name).await? {
            Some(existing) => {
                debug!(project_id = existing.id, name = %name, "Project already seeded");
                summary.unchanged += 1;
            }
            None => {
                let project = repo.create_project(name).await?;
                debug!(project_id = project.id, name = %name, "Project created");
                summary.created += 1;
            }
        }
    }

    info!(
        created = summary.created,
        unchanged = summary.unchanged,
        "Project seeding completed"
    );
    Ok(summary)
}

/// デフォルトのプロジェクト一覧を投入する
pub async fn seed_default_projects<R>(repo: &R) -> Result<SeedSummary, sqlx::Error>
where
    R: ProjectRepository + ?Sized,
{
    seed_projects(repo, &DEFAULT_PROJECTS).await
}
