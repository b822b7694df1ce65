//! プローブ対象URLの検証

use reqwest::Url;

use super::ProbeError;

/// プローブ対象として受け付けるスキーム
const ALLOWED_SCHEMES: [&str; 2] = ["http", "https"];

/// プローブ対象URLをパースして検証する
///
/// 絶対URLで、スキームがhttp/https、ホストを持つものだけを受け付ける。
pub fn parse_target(target: &str) -> Result<Url, ProbeError> {
    let url = Url::parse(target).map_err(|e| ProbeError::InvalidUrl {
        url: target.to_string(),
        reason: e.to_string(),
    })?;

    if !ALLOWED_SCHEMES.contains(&url.scheme()) {
        return Err(ProbeError::InvalidUrl {
            url: target.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(ProbeError::InvalidUrl {
            url: target.to_string(),
            reason: "missing host".to_string(),
        }),
    }
}
