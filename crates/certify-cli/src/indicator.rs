use certify_notify::LoadingIndicator;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};

/// 在标准错误输出上显示进行中的请求
#[derive(Default)]
pub struct StatusLine {
    depth: AtomicUsize,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LoadingIndicator for StatusLine {
    fn show(&self) {
        if self.depth.fetch_add(1, Ordering::SeqCst) == 0 {
            let mut stderr = std::io::stderr();
            let _ = write!(stderr, "Working...\r");
            let _ = stderr.flush();
        }
    }

    fn hide(&self) {
        let previous = self
            .depth
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |d| d.checked_sub(1))
            .unwrap_or(0);
        if previous == 1 {
            let mut stderr = std::io::stderr();
            let _ = write!(stderr, "          \r");
            let _ = stderr.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_never_underflows() {
        let line = StatusLine::new();
        line.hide();
        assert_eq!(line.depth.load(Ordering::SeqCst), 0);

        line.show();
        line.show();
        line.hide();
        assert_eq!(line.depth.load(Ordering::SeqCst), 1);
        line.hide();
        assert_eq!(line.depth.load(Ordering::SeqCst), 0);
    }
}
