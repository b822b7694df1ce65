//! 共通型定義
//!
//! インベントリレコード（Project, Server）とプローブ結果の型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// プロジェクト
///
/// シードデータでのみ作成・更新される。名前が一意キー。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    /// 一意識別子（DBで自動採番）
    pub id: i64,
    /// プロジェクト名
    pub name: String,
    /// 作成日時
    pub created_at: DateTime<Utc>,
    /// 更新日時
    pub updated_at: DateTime<Utc>,
}

/// サーバー
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Server {
    /// 一意識別子（DBで自動採番）
    pub id: i64,
    /// サーバーURL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// 稼働状態
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
    /// アプリケーションバージョン
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// 所属プロジェクトID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
}

/// サーバー作成用の入力
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewServer {
    /// サーバーURL
    #[serde(default)]
    pub url: Option<String>,
    /// 稼働状態
    #[serde(default)]
    pub status: Option<bool>,
    /// アプリケーションバージョン
    #[serde(default)]
    pub version: Option<String>,
    /// 所属プロジェクトID
    #[serde(default)]
    pub project_id: Option<i64>,
}

/// プローブ判定結果
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ProbeStatus {
    /// HTTP 200 を返した
    #[serde(rename = "Running")]
    Running,
    /// 200以外、または到達不能
    #[serde(rename = "Not Running")]
    NotRunning,
}

impl ProbeStatus {
    /// 表示用文字列に変換
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::NotRunning => "Not Running",
        }
    }

    /// 稼働中かどうか
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }

    /// HTTPステータスコードから判定する（200のみRunning）
    pub fn from_status_code(code: u16) -> Self {
        if code == 200 {
            Self::Running
        } else {
            Self::NotRunning
        }
    }
}

impl std::fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 1回のプローブのレポート
///
/// 毎回新しく生成され、キャッシュも永続化もされない。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProbeReport {
    /// 判定結果
    pub status: ProbeStatus,
    /// プローブしたURL（入力そのまま）
    pub observed_url: String,
    /// 受信したHTTPステータスコード（到達不能時はNone）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,
    /// 診断用の補足情報（到達不能の原因など）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ProbeReport {
    /// HTTPレスポンスを受信した場合のレポート
    pub fn from_response(observed_url: impl Into<String>, code: u16) -> Self {
        let status = ProbeStatus::from_status_code(code);
        Self {
            status,
            observed_url: observed_url.into(),
            http_status: Some(code),
            detail: match status {
                ProbeStatus::Running => None,
                ProbeStatus::NotRunning => Some(format!("HTTP {}", code)),
            },
        }
    }

    /// 通信レベルで失敗した場合のレポート
    pub fn unreachable(observed_url: impl Into<String>, cause: impl Into<String>) -> Self {
        Self {
            status: ProbeStatus::NotRunning,
            observed_url: observed_url.into(),
            http_status: None,
            detail: Some(cause.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_status_serialization() {
        assert_eq!(
            serde_json::to_string(&ProbeStatus::Running).unwrap(),
            "\"Running\""
        );
        assert_eq!(
            serde_json::to_string(&ProbeStatus::NotRunning).unwrap(),
            "\"Not Running\""
        );
    }

    #[test]
    fn test_probe_status_from_status_code() {
        assert_eq!(ProbeStatus::from_status_code(200), ProbeStatus::Running);
        // 200以外の2xxもNot Running
        assert_eq!(ProbeStatus::from_status_code(204), ProbeStatus::NotRunning);
        assert_eq!(ProbeStatus::from_status_code(302), ProbeStatus::NotRunning);
        assert_eq!(ProbeStatus::from_status_code(404), ProbeStatus::NotRunning);
        assert_eq!(ProbeStatus::from_status_code(503), ProbeStatus::NotRunning);
    }

    #[test]
    fn test_probe_status_display() {
        assert_eq!(ProbeStatus::Running.to_string(), "Running");
        assert_eq!(ProbeStatus::NotRunning.to_string(), "Not Running");
        assert!(ProbeStatus::Running.is_running());
        assert!(!ProbeStatus::NotRunning.is_running());
    }

    #[test]
    fn test_probe_report_from_response() {
        let ok = ProbeReport::from_response("http://localhost/health", 200);
        assert_eq!(ok.status, ProbeStatus::Running);
        assert_eq!(ok.http_status, Some(200));
        assert!(ok.detail.is_none());

        let unavailable = ProbeReport::from_response("http://localhost/health", 503);
        assert_eq!(unavailable.status, ProbeStatus::NotRunning);
        assert_eq!(unavailable.detail.as_deref(), Some("HTTP 503"));
    }

    #[test]
    fn test_probe_report_unreachable_keeps_url() {
        let report = ProbeReport::unreachable("http://localhost:9999/health", "connection refused");
        assert_eq!(report.status, ProbeStatus::NotRunning);
        assert_eq!(report.observed_url, "http://localhost:9999/health");
        assert!(report.http_status.is_none());
    }

    #[test]
    fn test_server_skips_empty_fields() {
        let server = Server {
            id: 1,
            url: None,
            status: None,
            version: None,
            project_id: Some(3),
        };
        let json = serde_json::to_value(&server).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "project_id": 3}));
    }
}
