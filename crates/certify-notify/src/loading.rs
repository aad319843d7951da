use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::debug;

/// 加载状态指示器
pub trait LoadingIndicator: Send + Sync {
    fn show(&self);
    fn hide(&self);
}

/// 创建时显示、销毁时隐藏
pub struct LoadingGuard {
    indicator: Option<Arc<dyn LoadingIndicator>>,
}

impl LoadingGuard {
    pub fn new(indicator: Option<Arc<dyn LoadingIndicator>>) -> Self {
        if let Some(indicator) = &indicator {
            indicator.show();
        }
        Self { indicator }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        if let Some(indicator) = &self.indicator {
            indicator.hide();
        }
    }
}

/// 按嵌套深度计数的指示器
#[derive(Default)]
pub struct CountingIndicator {
    active: AtomicUsize,
    shown: AtomicUsize,
}

impl CountingIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前未结束的请求数
    pub fn active(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }

    /// 累计显示次数
    pub fn shown(&self) -> usize {
        self.shown.load(Ordering::SeqCst)
    }

    pub fn is_loading(&self) -> bool {
        self.active() > 0
    }
}

impl LoadingIndicator for CountingIndicator {
    fn show(&self) {
        let count = self.active.fetch_add(1, Ordering::SeqCst);
        self.shown.fetch_add(1, Ordering::SeqCst);
        debug!("Loading shown, active: {}", count + 1);
    }

    fn hide(&self) {
        let result = self
            .active
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
        if let Ok(previous) = result {
            debug!("Loading hidden, active: {}", previous - 1);
        }
    }
}
