use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::store::SessionStore;

/// 会话保活任务句柄，丢弃时停止任务
pub struct KeepAliveHandle {
    task: JoinHandle<()>,
}

impl KeepAliveHandle {
    pub(crate) fn spawn(store: Arc<SessionStore>, interval: Duration) -> Self {
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // 第一次 tick 立即返回
            ticker.tick().await;

            loop {
                ticker.tick().await;
                if !store.refresh() {
                    debug!("Keepalive tick skipped: no active session");
                }
            }
        });

        Self { task }
    }

    /// 停止任务
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for KeepAliveHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
