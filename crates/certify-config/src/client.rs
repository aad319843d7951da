use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::messages::MessagesConfig;

/// 客户端全局配置
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub messages: MessagesConfig,
}

/// 后端 API 配置
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// 后端地址，如 `http://localhost:8000`
    pub base_url: String,

    /// API 版本前缀
    pub api_version: String,

    /// 请求超时（毫秒），由 HTTP 传输层执行
    pub request_timeout_ms: u64,

    /// 按二进制文件处理的响应类型
    pub binary_content_types: Vec<String>,
}

impl ApiConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            api_version: "/api/v1".to_string(),
            request_timeout_ms: 30_000,
            binary_content_types: vec![
                "application/pdf".to_string(),
                "application/zip".to_string(),
            ],
        }
    }
}

/// 会话配置
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SessionConfig {
    /// 令牌有效期（分钟）
    pub token_expiry_minutes: u64,

    /// 会话保活间隔（秒）
    pub keepalive_interval_secs: u64,

    pub token_key: String,
    pub role_key: String,
    pub timestamp_key: String,
}

impl SessionConfig {
    pub fn token_expiry(&self) -> Duration {
        Duration::from_secs(self.token_expiry_minutes.saturating_mul(60))
    }

    pub fn keepalive_interval(&self) -> Duration {
        Duration::from_secs(self.keepalive_interval_secs)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_expiry_minutes: 30,
            keepalive_interval_secs: 60,
            token_key: "certify_api_token".to_string(),
            role_key: "certify_user_type".to_string(),
            timestamp_key: "token_timestamp".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_client_config() {
        let config = ClientConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.api_version, "/api/v1");
        assert_eq!(config.api.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.session.token_expiry(), Duration::from_secs(30 * 60));
        assert_eq!(config.session.token_key, "certify_api_token");
    }

    #[test]
    fn test_huge_expiry_saturates() {
        let session = SessionConfig {
            token_expiry_minutes: u64::MAX,
            ..Default::default()
        };
        assert_eq!(session.token_expiry(), Duration::from_secs(u64::MAX));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ClientConfig = toml::from_str(
            r#"
[api]
base_url = "https://certify.example.org"
"#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "https://certify.example.org");
        assert_eq!(config.api.api_version, "/api/v1");
        assert_eq!(config.session.token_expiry_minutes, 30);
    }
}
