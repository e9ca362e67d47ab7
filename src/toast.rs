// src/toast.rs
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// How long a toast stays on screen.
pub const TOAST_VISIBLE_MS: u64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

struct ActiveToast {
    toast: Toast,
    token: u64,
}

#[derive(Default)]
struct ToastInner {
    current: Mutex<Option<ActiveToast>>,
    seq: AtomicU64,
}

/// Transient status messages with a fixed auto-dismiss delay.
///
/// Every `show` gets a monotonic token and the scheduled hide only applies
/// while its token is still current, so a timer left over from an earlier
/// toast can never truncate a newer one.
#[derive(Clone, Default)]
pub struct ToastNotifier {
    inner: Arc<ToastInner>,
}

impl ToastNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display a toast, replacing whatever is currently visible, and schedule
    /// its dismissal after [`TOAST_VISIBLE_MS`].
    pub fn show(&self, message: impl Into<String>, kind: ToastKind) {
        let token = self.inner.seq.fetch_add(1, Ordering::SeqCst) + 1;
        let toast = Toast {
            message: message.into(),
            kind,
        };
        *self.inner.current.lock().unwrap() = Some(ActiveToast { toast, token });

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(TOAST_VISIBLE_MS)).await;
            let mut current = inner.current.lock().unwrap();
            if current.as_ref().map(|active| active.token) == Some(token) {
                *current = None;
            }
        });
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Info);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Error);
    }

    /// The toast currently on screen, if any.
    pub fn current(&self) -> Option<Toast> {
        self.inner
            .current
            .lock()
            .unwrap()
            .as_ref()
            .map(|active| active.toast.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_toast_hides_after_delay() {
        let toasts = ToastNotifier::new();
        toasts.success("Analysis completed successfully!");

        tokio::time::sleep(Duration::from_millis(2999)).await;
        let visible = toasts.current().expect("toast should still be visible");
        assert_eq!(visible.message, "Analysis completed successfully!");
        assert_eq!(visible.kind, ToastKind::Success);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(toasts.current(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_timer_does_not_truncate_newer_toast() {
        let toasts = ToastNotifier::new();
        toasts.info("first");

        tokio::time::sleep(Duration::from_millis(2000)).await;
        toasts.error("second");

        // The first toast's timer fires at t=3000; the second must survive it.
        tokio::time::sleep(Duration::from_millis(1500)).await;
        let visible = toasts.current().expect("second toast truncated");
        assert_eq!(visible.message, "second");

        // And still dismiss on its own schedule, at t=5000.
        tokio::time::sleep(Duration::from_millis(1501)).await;
        assert_eq!(toasts.current(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_show_replaces_message_immediately() {
        let toasts = ToastNotifier::new();
        toasts.info("uploading");
        toasts.success("done");
        assert_eq!(toasts.current().map(|t| t.message), Some("done".into()));
    }
}
