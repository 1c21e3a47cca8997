use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use leptos::prelude::*;

/// How long a toast stays on screen.
#[cfg(target_arch = "wasm32")]
const AUTO_DISMISS_MS: u64 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// Notification queue provided through context; any page can push, the
/// toast host at the root renders and auto-dismisses.
#[derive(Clone)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: Arc<AtomicU64>,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn items(&self) -> RwSignal<Vec<Toast>> {
        self.items
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastLevel::Info, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|toast| toast.id != id));
    }

    fn push(&self, level: ToastLevel, message: String) {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.items.update(|items| {
            items.push(Toast { id, level, message });
        });

        #[cfg(target_arch = "wasm32")]
        {
            let toasts = self.clone();
            set_timeout(
                move || toasts.dismiss(id),
                std::time::Duration::from_millis(AUTO_DISMISS_MS),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_queue_in_order_and_dismiss_by_id() {
        let toasts = Toasts::new();
        toasts.success("saved");
        toasts.error("failed");

        let items = toasts.items().get_untracked();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].level, ToastLevel::Success);
        assert_eq!(items[1].message, "failed");

        toasts.dismiss(items[0].id);
        let items = toasts.items().get_untracked();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].message, "failed");
    }
}
