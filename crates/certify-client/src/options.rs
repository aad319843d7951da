use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde::Serialize;
use std::time::Duration;

use crate::error::Result;

/// 请求体
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
    /// 无请求体
    #[default]
    Empty,

    /// 序列化为 JSON 文本发送
    Json(serde_json::Value),

    /// 已编码的表单（`application/x-www-form-urlencoded`），原样发送
    Form(Vec<(String, String)>),

    /// 原始字节
    Raw {
        bytes: Vec<u8>,
        content_type: String,
    },
}

impl RequestBody {
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(RequestBody::Json(serde_json::to_value(value)?))
    }

    pub fn form<K, V>(pairs: &[(K, V)]) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        RequestBody::Form(
            pairs
                .iter()
                .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RequestBody::Empty)
    }

    /// 默认的 JSON Content-Type 是否适用
    pub(crate) fn wants_json_content_type(&self) -> bool {
        matches!(self, RequestBody::Empty | RequestBody::Json(_))
    }
}

impl From<serde_json::Value> for RequestBody {
    fn from(value: serde_json::Value) -> Self {
        RequestBody::Json(value)
    }
}

impl From<Option<serde_json::Value>> for RequestBody {
    fn from(value: Option<serde_json::Value>) -> Self {
        value.map(RequestBody::Json).unwrap_or_default()
    }
}

/// 单次请求的配置
///
/// | 字段 | 默认值 |
/// |---|---|
/// | `method` | `GET` |
/// | `headers` | 空，调用方的头覆盖默认头 |
/// | `body` | [`RequestBody::Empty`] |
/// | `skip_auth` | `false` |
/// | `timeout` | `None`，使用客户端配置的超时 |
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: RequestBody,
    pub skip_auth: bool,
    pub timeout: Option<Duration>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: HeaderMap::new(),
            body: RequestBody::Empty,
            skip_auth: false,
            timeout: None,
        }
    }
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    pub fn post() -> Self {
        Self::new(Method::POST)
    }

    pub fn put() -> Self {
        Self::new(Method::PUT)
    }

    pub fn patch() -> Self {
        Self::new(Method::PATCH)
    }

    pub fn delete() -> Self {
        Self::new(Method::DELETE)
    }

    pub fn body(mut self, body: impl Into<RequestBody>) -> Self {
        self.body = body.into();
        self
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// 不附带 Authorization 头
    pub fn skip_auth(mut self) -> Self {
        self.skip_auth = true;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::ACCEPT;

    #[test]
    fn test_defaults() {
        let options = RequestOptions::default();
        assert_eq!(options.method, Method::GET);
        assert!(options.headers.is_empty());
        assert!(options.body.is_empty());
        assert!(!options.skip_auth);
        assert!(options.timeout.is_none());
    }

    #[test]
    fn test_builder_methods() {
        let options = RequestOptions::post()
            .body(serde_json::json!({ "name": "Rust" }))
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .skip_auth()
            .timeout(Duration::from_secs(5));

        assert_eq!(options.method, Method::POST);
        assert_eq!(options.body, RequestBody::Json(serde_json::json!({ "name": "Rust" })));
        assert_eq!(options.headers.get(ACCEPT).unwrap(), "application/json");
        assert!(options.skip_auth);
        assert_eq!(options.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_form_body() {
        let body = RequestBody::form(&[("username", "admin"), ("password", "secret")]);
        assert!(!body.wants_json_content_type());
        assert_eq!(
            body,
            RequestBody::Form(vec![
                ("username".to_string(), "admin".to_string()),
                ("password".to_string(), "secret".to_string()),
            ])
        );
    }

    #[test]
    fn test_optional_json_body() {
        assert!(RequestBody::from(None).is_empty());
        assert!(RequestBody::from(Some(serde_json::json!({}))).wants_json_content_type());
    }
}
