use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{ApiError, Result};

/// 成功响应的内容
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// 结构化数据
    Json(Value),

    /// 文件（PDF、ZIP 等）
    Binary { bytes: Vec<u8>, content_type: String },
}

impl Payload {
    pub fn empty() -> Self {
        Payload::Json(Value::Object(Map::new()))
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, Payload::Binary { .. })
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Binary { .. } => None,
        }
    }

    /// 解码为具体类型
    pub fn json<T: DeserializeOwned>(self) -> Result<T> {
        match self {
            Payload::Json(value) => Ok(serde_json::from_value(value)?),
            Payload::Binary { content_type, .. } => Err(ApiError::serialization(format!(
                "expected a JSON payload, received {}",
                content_type
            ))),
        }
    }

    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            Payload::Binary { bytes, .. } => Some(bytes),
            Payload::Json(_) => None,
        }
    }
}

/// 宽松解析：空响应或无法解析的内容都视为空对象
pub(crate) fn parse_lenient(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Object(Map::new());
    }

    match serde_json::from_str(text) {
        Ok(value) => value,
        Err(e) => {
            debug!(error = %e, "Response body is not valid JSON, using empty object");
            Value::Object(Map::new())
        }
    }
}

/// 提取后端的 `detail` 字段；校验错误列表取各项的 `msg`
pub(crate) fn extract_detail(data: &Value) -> Option<String> {
    match data.get("detail")? {
        Value::String(detail) if !detail.is_empty() => Some(detail.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_lenient() {
        assert_eq!(parse_lenient(""), json!({}));
        assert_eq!(parse_lenient("  \n"), json!({}));
        assert_eq!(parse_lenient("<html>oops</html>"), json!({}));
        assert_eq!(parse_lenient(r#"[1, 2]"#), json!([1, 2]));
    }

    #[test]
    fn test_extract_detail() {
        assert_eq!(
            extract_detail(&json!({ "detail": "not found" })),
            Some("not found".to_string())
        );
        assert_eq!(
            extract_detail(&json!({
                "detail": [
                    { "loc": ["body", "cpf"], "msg": "invalid CPF" },
                    { "loc": ["body", "email"], "msg": "value is not a valid email address" }
                ]
            })),
            Some("invalid CPF; value is not a valid email address".to_string())
        );
        assert_eq!(extract_detail(&json!({ "detail": "" })), None);
        assert_eq!(extract_detail(&json!({ "error": "x" })), None);
        assert_eq!(extract_detail(&json!([])), None);
    }

    #[test]
    fn test_payload_json_decode() {
        let payload = Payload::Json(json!({ "access_token": "abc", "token_type": "bearer" }));
        let token: certify_types::Token = payload.json().unwrap();
        assert_eq!(token.access_token, "abc");

        let binary = Payload::Binary {
            bytes: vec![1, 2, 3],
            content_type: "application/pdf".to_string(),
        };
        assert!(binary.clone().json::<Value>().is_err());
        assert_eq!(binary.into_bytes(), Some(vec![1, 2, 3]));
    }
}
