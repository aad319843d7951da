use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 默认展示时长
pub const DEFAULT_DURATION: Duration = Duration::from_millis(5000);

/// 通知级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifyLevel {
    /// 成功
    Success,
    /// 信息
    Info,
    /// 警告
    Warning,
    /// 错误
    Error,
}

impl NotifyLevel {
    pub(crate) fn rank(&self) -> u8 {
        match self {
            NotifyLevel::Info => 0,
            NotifyLevel::Success => 1,
            NotifyLevel::Warning => 2,
            NotifyLevel::Error => 3,
        }
    }
}

/// 通知消息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyMessage {
    /// 内容
    pub content: String,

    /// 级别
    pub level: NotifyLevel,

    /// 展示时长，零表示不自动消失
    #[serde(with = "duration_millis")]
    pub duration: Duration,

    /// 时间
    pub timestamp: DateTime<Utc>,
}

impl NotifyMessage {
    pub fn new(content: impl Into<String>, level: NotifyLevel) -> Self {
        Self {
            content: content.into(),
            level,
            duration: DEFAULT_DURATION,
            timestamp: Utc::now(),
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self::new(content, NotifyLevel::Success)
    }

    pub fn info(content: impl Into<String>) -> Self {
        Self::new(content, NotifyLevel::Info)
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self::new(content, NotifyLevel::Warning)
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self::new(content, NotifyLevel::Error)
    }
}

mod duration_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_millis(u64::deserialize(deserializer)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors() {
        let message = NotifyMessage::error("boom");
        assert_eq!(message.level, NotifyLevel::Error);
        assert_eq!(message.duration, DEFAULT_DURATION);

        let message = NotifyMessage::success("ok").with_duration(Duration::ZERO);
        assert_eq!(message.level, NotifyLevel::Success);
        assert!(message.duration.is_zero());
    }

    #[test]
    fn test_message_json() {
        let json = serde_json::to_value(NotifyMessage::warning("careful")).unwrap();
        assert_eq!(json["level"], "warning");
        assert_eq!(json["duration"], 5000);
    }
}
