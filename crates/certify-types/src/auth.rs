use serde::{Deserialize, Serialize};

/// 登录接口返回的访问令牌
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// 学员注册请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentRegister {
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub password: String,
}

/// 学员登录请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentLogin {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_default_type() {
        let token: Token = serde_json::from_str(r#"{"access_token":"abc"}"#).unwrap();
        assert_eq!(token.access_token, "abc");
        assert_eq!(token.token_type, "bearer");
    }
}
