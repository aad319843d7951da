use thiserror::Error;

/// 请求失败的分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Network,
    Unauthorized,
    Forbidden,
    NotFound,
    Server,
    Validation,
    Serialization,
    Config,
}

/// 客户端错误类型，消息即面向用户的提示
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 网络或传输层错误
    #[error("{0}")]
    Network(String),

    /// 401，会话已被清除
    #[error("{0}")]
    Unauthorized(String),

    /// 403
    #[error("{0}")]
    Forbidden(String),

    /// 404
    #[error("{0}")]
    NotFound(String),

    /// 5xx
    #[error("{0}")]
    Server(String),

    /// 其他 4xx 及未处理的状态码
    #[error("{0}")]
    Validation(String),

    /// 请求体编码或响应体解码失败
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// 客户端配置错误
    #[error("Configuration error: {0}")]
    Config(String),
}

/// 客户端结果类型
pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Network(_) => ErrorKind::Network,
            ApiError::Unauthorized(_) => ErrorKind::Unauthorized,
            ApiError::Forbidden(_) => ErrorKind::Forbidden,
            ApiError::NotFound(_) => ErrorKind::NotFound,
            ApiError::Server(_) => ErrorKind::Server,
            ApiError::Validation(_) => ErrorKind::Validation,
            ApiError::Serialization(_) => ErrorKind::Serialization,
            ApiError::Config(_) => ErrorKind::Config,
        }
    }

    /// 错误消息
    pub fn message(&self) -> &str {
        match self {
            ApiError::Network(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::Forbidden(msg)
            | ApiError::NotFound(msg)
            | ApiError::Server(msg)
            | ApiError::Validation(msg)
            | ApiError::Serialization(msg)
            | ApiError::Config(msg) => msg,
        }
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        ApiError::Serialization(msg.into())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message() {
        let err = ApiError::NotFound("not found".to_string());
        assert_eq!(err.to_string(), "not found");
        assert_eq!(err.message(), "not found");
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_from_serde_error() {
        let err: ApiError = serde_json::from_str::<u32>("\"x\"").unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::Serialization);
    }
}
