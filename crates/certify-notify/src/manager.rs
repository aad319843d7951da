use crate::message::{NotifyLevel, NotifyMessage};
use crate::notifier::{Notifier, NotifyResult};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

/// 通知管理器，把消息分发给所有已注册的通知器
pub struct NotifyManager {
    notifiers: Arc<RwLock<Vec<Box<dyn Notifier>>>>,

    /// 最小通知级别
    min_level: NotifyLevel,
}

impl NotifyManager {
    pub fn new(min_level: NotifyLevel) -> Self {
        Self {
            notifiers: Arc::new(RwLock::new(Vec::new())),
            min_level,
        }
    }

    /// 注册通知器
    pub async fn register(&self, notifier: Box<dyn Notifier>) {
        let mut notifiers = self.notifiers.write().await;
        info!("Registered notifier: {}", notifier.name());
        notifiers.push(notifier);
    }

    /// 发送到所有渠道，单个通知器失败只记录日志
    pub async fn broadcast(&self, message: &NotifyMessage) -> usize {
        if !self.should_notify(&message.level) {
            return 0;
        }

        let notifiers = self.notifiers.read().await;
        let mut delivered = 0;

        for notifier in notifiers.iter().filter(|n| n.is_enabled()) {
            match notifier.send(message).await {
                Ok(result) if result.success => {
                    debug!("Notification sent via {}: {}", notifier.name(), message.content);
                    delivered += 1;
                }
                Ok(result) => {
                    error!("Notification failed via {}: {}", notifier.name(), result.message);
                }
                Err(e) => {
                    error!("Notification error via {}: {}", notifier.name(), e);
                }
            }
        }

        delivered
    }

    fn should_notify(&self, level: &NotifyLevel) -> bool {
        level.rank() >= self.min_level.rank()
    }
}

impl Default for NotifyManager {
    fn default() -> Self {
        Self::new(NotifyLevel::Info)
    }
}

#[async_trait]
impl Notifier for NotifyManager {
    async fn send(&self, message: &NotifyMessage) -> Result<NotifyResult> {
        self.broadcast(message).await;
        Ok(NotifyResult::success())
    }

    fn name(&self) -> &str {
        "manager"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{RecordingNotifier, TracingNotifier};

    #[test]
    fn test_should_notify() {
        let manager = NotifyManager::new(NotifyLevel::Warning);

        assert!(manager.should_notify(&NotifyLevel::Warning));
        assert!(manager.should_notify(&NotifyLevel::Error));
        assert!(!manager.should_notify(&NotifyLevel::Success));
        assert!(!manager.should_notify(&NotifyLevel::Info));
    }

    #[tokio::test]
    async fn test_broadcast_to_all_notifiers() {
        let manager = NotifyManager::default();
        let first = RecordingNotifier::new();
        let second = RecordingNotifier::new();
        manager.register(Box::new(first.clone())).await;
        manager.register(Box::new(second.clone())).await;

        let delivered = manager.broadcast(&NotifyMessage::info("hello")).await;
        assert_eq!(delivered, 2);
        assert_eq!(first.messages().len(), 1);
        assert_eq!(second.messages().len(), 1);
    }

    #[tokio::test]
    async fn test_filtered_message_not_delivered() {
        let manager = NotifyManager::new(NotifyLevel::Error);
        let recorder = RecordingNotifier::new();
        manager.register(Box::new(recorder.clone())).await;

        manager.send(&NotifyMessage::success("saved")).await.unwrap();
        assert!(recorder.messages().is_empty());
    }

    #[tokio::test]
    async fn test_disabled_notifier_skipped() {
        let manager = NotifyManager::default();
        let recorder = RecordingNotifier::new();
        manager.register(Box::new(recorder.clone())).await;
        manager
            .register(Box::new(TracingNotifier::new().with_enabled(false)))
            .await;

        let delivered = manager.broadcast(&NotifyMessage::info("hello")).await;
        assert_eq!(delivered, 1);
    }
}
