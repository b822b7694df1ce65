//! ヘルスプローブ
//!
//! 対象URLへ1回だけGETを送り、`Running` / `Not Running` を判定する。
//!
//! - HTTP 200 のときのみ `Running`
//! - 200以外のステータス、接続拒否、名前解決失敗、タイムアウト、
//!   壊れたレスポンスは `Not Running`（原因は`detail`に残す）
//! - 不正なURLは`ProbeError::InvalidUrl`として呼び出し元に返す
//!
//! リトライ・リダイレクト追従・結果キャッシュは行わない。

pub mod target;

use std::error::Error as StdError;
use std::time::Duration;

use launch_monitor_common::error::MonitorError;
use launch_monitor_common::types::{ProbeReport, ProbeStatus};
use reqwest::{redirect, Client};
use thiserror::Error;
use tracing::{debug, warn};

pub use target::parse_target;

/// プローブのデフォルトタイムアウト（秒）
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 5;

/// プローブ失敗（呼び出し元へ伝播するもの）
#[derive(Debug, Error)]
pub enum ProbeError {
    /// 対象URLが不正
    #[error("Invalid probe target '{url}': {reason}")]
    InvalidUrl {
        /// 入力されたURL
        url: String,
        /// 不正と判断した理由
        reason: String,
    },

    /// HTTPクライアントの構築・リクエスト組み立てに失敗
    #[error("Probe client error: {0}")]
    Client(String),
}

impl From<ProbeError> for MonitorError {
    fn from(err: ProbeError) -> Self {
        match err {
            ProbeError::InvalidUrl { .. } => MonitorError::InvalidUrl(err.to_string()),
            ProbeError::Client(message) => MonitorError::Http(message),
        }
    }
}

/// `Not Running`に畳み込まれる通信レベルの失敗の分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// 接続拒否
    ConnectionRefused,
    /// 名前解決失敗を含む接続失敗
    Connect,
    /// タイムアウト
    Timeout,
    /// レスポンスが壊れていて読めない
    MalformedResponse,
}

impl FailureKind {
    /// 文字列表現
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ConnectionRefused => "connection refused",
            Self::Connect => "connection failed",
            Self::Timeout => "timed out",
            Self::MalformedResponse => "malformed response",
        }
    }

    /// reqwestのエラーを分類する
    ///
    /// `Not Running`に畳み込まない種類（リクエスト組み立て失敗など）は`None`。
    fn classify(err: &reqwest::Error) -> Option<Self> {
        if err.is_timeout() {
            Some(Self::Timeout)
        } else if err.is_connect() {
            if has_io_kind(err, std::io::ErrorKind::ConnectionRefused) {
                Some(Self::ConnectionRefused)
            } else {
                Some(Self::Connect)
            }
        } else if err.is_builder() {
            None
        } else {
            // is_request / is_body / is_decode / is_redirect
            Some(Self::MalformedResponse)
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn has_io_kind(err: &(dyn StdError + 'static), kind: std::io::ErrorKind) -> bool {
    let mut current: Option<&(dyn StdError + 'static)> = Some(err);
    while let Some(e) = current {
        if let Some(io) = e.downcast_ref::<std::io::Error>() {
            if io.kind() == kind {
                return true;
            }
        }
        current = e.source();
    }
    false
}

/// エラーと原因チェーンを1行にまとめる
///
/// 既にメッセージへ含まれている原因は重ねて出さない。
fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut joined = err.to_string();
    let mut current = err.source();
    while let Some(e) = current {
        let message = e.to_string();
        if !message.is_empty() && !joined.contains(&message) {
            joined.push_str(": ");
            joined.push_str(&message);
        }
        current = e.source();
    }
    joined
}

/// プローブ結果をタグ付きで表したもの
#[derive(Debug)]
pub enum ProbeOutcome {
    /// HTTP 200
    Running(ProbeReport),
    /// 200以外、または到達不能
    NotRunning(ProbeReport),
    /// 入力URLが不正
    InvalidInput(ProbeError),
}

impl ProbeOutcome {
    /// プロセス終了コード（0: Running, 1: Not Running, 2: 不正入力）
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Running(_) => 0,
            Self::NotRunning(_) => 1,
            Self::InvalidInput(_) => 2,
        }
    }
}

impl From<ProbeReport> for ProbeOutcome {
    fn from(report: ProbeReport) -> Self {
        match report.status {
            ProbeStatus::Running => Self::Running(report),
            ProbeStatus::NotRunning => Self::NotRunning(report),
        }
    }
}

/// `check_status`の結果を畳み込む
///
/// 不正なURLだけが`InvalidInput`になり、クライアント側の失敗はそのまま返す。
impl TryFrom<Result<ProbeReport, ProbeError>> for ProbeOutcome {
    type Error = ProbeError;

    fn try_from(result: Result<ProbeReport, ProbeError>) -> Result<Self, Self::Error> {
        match result {
            Ok(report) => Ok(report.into()),
            Err(err @ ProbeError::InvalidUrl { .. }) => Ok(Self::InvalidInput(err)),
            Err(err @ ProbeError::Client(_)) => Err(err),
        }
    }
}

/// ヘルスプローブ
///
/// HTTPクライアントは接続プーリングのため共有するが、
/// 呼び出し間で判定結果は一切保持しない。
#[derive(Debug, Clone)]
pub struct HealthProbe {
    client: Client,
    timeout: Duration,
}

impl HealthProbe {
    /// タイムアウトを指定してプローブを作成
    pub fn new(timeout: Duration) -> Result<Self, ProbeError> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(redirect::Policy::none())
            .build()
            .map_err(|e| ProbeError::Client(e.to_string()))?;

        Ok(Self { client, timeout })
    }

    /// 設定されたタイムアウト
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// 対象URLの稼働状況を判定する
    pub async fn check_status(&self, target: &str) -> Result<ProbeReport, ProbeError> {
        let url = parse_target(target)?;

        match self.client.get(url).send().await {
            Ok(response) => {
                let code = response.status().as_u16();
                debug!(url = %target, response = ?response, "Probe response received");
                debug!(url = %target, status = code, "Probe status code");
                Ok(ProbeReport::from_response(target, code))
            }
            Err(err) => match FailureKind::classify(&err) {
                Some(kind) => {
                    let cause = error_chain(&err);
                    warn!(url = %target, kind = %kind, error = %cause, "Probe target unreachable");
                    Ok(ProbeReport::unreachable(target, format!("{}: {}", kind, cause)))
                }
                None => Err(ProbeError::Client(error_chain(&err))),
            },
        }
    }
}
