use certify_types::Role;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// 会话快照
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Session {
    /// 访问令牌，序列化时不输出
    #[serde(skip)]
    pub token: Option<String>,

    /// 角色
    pub role: Option<Role>,

    /// 签发时间
    pub issued_at: Option<DateTime<Utc>>,
}

impl Session {
    /// 是否持有令牌（不检查过期）
    pub fn is_present(&self) -> bool {
        self.token.is_some()
    }

    /// 仅保留前后各 4 位的令牌
    pub fn masked_token(&self) -> Option<String> {
        self.token.as_deref().map(|token| {
            let chars: Vec<char> = token.chars().collect();
            if chars.len() <= 8 {
                "*".repeat(chars.len())
            } else {
                let head: String = chars[..4].iter().collect();
                let tail: String = chars[chars.len() - 4..].iter().collect();
                format!("{}…{}", head, tail)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_token() {
        let session = Session {
            token: Some("eyJhbGciOiJIUzI1NiJ9.payload".to_string()),
            role: Some(Role::Admin),
            issued_at: Some(Utc::now()),
        };
        assert_eq!(session.masked_token().unwrap(), "eyJh…load");

        let short = Session {
            token: Some("abc".to_string()),
            ..Default::default()
        };
        assert_eq!(short.masked_token().unwrap(), "***");
        assert!(Session::default().masked_token().is_none());
    }

    #[test]
    fn test_token_not_serialized() {
        let session = Session {
            token: Some("secret".to_string()),
            role: Some(Role::Student),
            issued_at: None,
        };
        let json = serde_json::to_string(&session).unwrap();
        assert!(!json.contains("secret"));
        assert!(json.contains("student"));
    }
}
