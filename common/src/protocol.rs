//! 通信プロトコル定義
//!
//! Web API のリクエスト・レスポンス

use serde::{Deserialize, Serialize};

use crate::types::{ProbeReport, ProbeStatus, Project, Server};

/// `GET /check_status` のクエリ
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckStatusQuery {
    /// プローブ先URL（未指定時は設定値を使用）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// `GET /check_status` のレスポンス
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckStatusResponse {
    /// 判定結果 ("Running" または "Not Running")
    pub result: ProbeStatus,
    /// プローブしたURL
    pub url: String,
    /// 受信したHTTPステータスコード
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,
}

impl From<ProbeReport> for CheckStatusResponse {
    fn from(report: ProbeReport) -> Self {
        Self {
            result: report.status,
            url: report.observed_url,
            http_status: report.http_status,
        }
    }
}

/// サーバー一覧付きのプロジェクト
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectWithServers {
    /// プロジェクト本体
    #[serde(flatten)]
    pub project: Project,
    /// 所属サーバー
    #[serde(default)]
    pub servers: Vec<Server>,
}

/// `GET /api/projects` のレスポンス
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectListResponse {
    /// プロジェクト一覧
    pub projects: Vec<ProjectWithServers>,
}
