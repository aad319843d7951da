use crate::message::{NotifyLevel, NotifyMessage};
use crate::notifier::{Notifier, NotifyResult};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tracing::{error, info, warn};

// ============================================================================
// 日志通知
// ============================================================================

/// 写入 tracing 日志的通知器
pub struct TracingNotifier {
    enabled: bool,
}

impl TracingNotifier {
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// 启用或停用
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl Default for TracingNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for TracingNotifier {
    async fn send(&self, message: &NotifyMessage) -> Result<NotifyResult> {
        let duration_ms = message.duration.as_millis() as u64;
        match message.level {
            NotifyLevel::Error => error!(duration_ms, "{}", message.content),
            NotifyLevel::Warning => warn!(duration_ms, "{}", message.content),
            NotifyLevel::Success | NotifyLevel::Info => info!(duration_ms, "{}", message.content),
        }
        Ok(NotifyResult::success())
    }

    fn name(&self) -> &str {
        "tracing"
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

// ============================================================================
// 内存记录
// ============================================================================

/// 把通知保存在内存中，便于调用方事后检查
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<NotifyMessage>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已记录的全部通知
    pub fn messages(&self) -> Vec<NotifyMessage> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }

    /// 指定级别的通知内容
    pub fn contents(&self, level: NotifyLevel) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter(|m| m.level == level)
            .map(|m| m.content)
            .collect()
    }

    pub fn clear(&self) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.clear();
        }
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, message: &NotifyMessage) -> Result<NotifyResult> {
        match self.messages.lock() {
            Ok(mut messages) => {
                messages.push(message.clone());
                Ok(NotifyResult::success())
            }
            Err(_) => Ok(NotifyResult::failure("recording notifier lock poisoned")),
        }
    }

    fn name(&self) -> &str {
        "recording"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_recording_notifier() {
        let notifier = RecordingNotifier::new();
        notifier.send(&NotifyMessage::error("first")).await.unwrap();
        notifier.send(&NotifyMessage::success("second")).await.unwrap();

        assert_eq!(notifier.messages().len(), 2);
        assert_eq!(notifier.contents(NotifyLevel::Error), vec!["first".to_string()]);

        notifier.clear();
        assert!(notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn test_tracing_notifier_always_succeeds() {
        let notifier = TracingNotifier::new();
        let result = notifier.send(&NotifyMessage::warning("hello")).await.unwrap();
        assert!(result.success);
    }

    #[test]
    fn test_tracing_notifier_can_be_disabled() {
        assert!(TracingNotifier::new().is_enabled());
        assert!(!TracingNotifier::new().with_enabled(false).is_enabled());
    }
}
