//! In-memory toast display with auto-hide.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use gatehouse_core::notification::{Toast, ToastDisplay};

/// Stand-in lifetime for durations too long to add to an `Instant`.
const FAR_FUTURE: Duration = Duration::from_secs(60 * 60 * 24 * 365 * 30);

struct ActiveToast {
    toast: Toast,
    expires_at: Instant,
}

/// Keeps the toasts that are currently on screen.
///
/// A toast disappears once its duration has elapsed or when its dismiss
/// action is used. Clones share the same tray.
#[derive(Clone, Default)]
pub struct ToastTray {
    active: Arc<Mutex<Vec<ActiveToast>>>,
}

impl ToastTray {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toasts still visible now, oldest first.
    pub fn visible(&self) -> Vec<Toast> {
        self.visible_at(Instant::now())
    }

    /// Toasts still visible at `now`; expired ones are dropped.
    pub fn visible_at(&self, now: Instant) -> Vec<Toast> {
        let mut active = self.lock();
        active.retain(|entry| entry.expires_at > now);
        active.iter().map(|entry| entry.toast.clone()).collect()
    }

    /// The dismiss action. Returns `false` if the toast was already gone.
    pub fn dismiss(&self, id: &str) -> bool {
        let mut active = self.lock();
        let before = active.len();
        active.retain(|entry| entry.toast.id != id);
        active.len() != before
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ActiveToast>> {
        self.active.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ToastDisplay for ToastTray {
    fn show(&self, toast: Toast) {
        let now = Instant::now();
        let expires_at = now
            .checked_add(toast.duration)
            .or_else(|| now.checked_add(FAR_FUTURE))
            .unwrap_or(now);

        let mut active = self.lock();
        active.retain(|entry| entry.expires_at > now);
        active.push(ActiveToast { toast, expires_at });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification_broker::NotificationBroker;
    use gatehouse_core::notification::Notification;

    fn toast(id: &str, millis: u64) -> Toast {
        Toast {
            id: id.to_string(),
            message: format!("message {}", id),
            action_label: "×".to_string(),
            duration: Duration::from_millis(millis),
            status: None,
            classes: Vec::new(),
        }
    }

    #[test]
    fn test_toast_hides_after_duration() {
        let tray = ToastTray::new();
        tray.show(toast("a", 4000));
        tray.show(toast("b", 100));

        assert_eq!(tray.visible().len(), 2);

        let later = Instant::now() + Duration::from_millis(500);
        let visible = tray.visible_at(later);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "a");

        let much_later = Instant::now() + Duration::from_secs(5);
        assert!(tray.visible_at(much_later).is_empty());
    }

    #[test]
    fn test_dismiss_removes_early() {
        let tray = ToastTray::new();
        tray.show(toast("a", 4000));

        assert!(tray.dismiss("a"));
        assert!(!tray.dismiss("a"));
        assert!(tray.visible().is_empty());
    }

    #[test]
    fn test_unbounded_duration_stays_visible() {
        let tray = ToastTray::new();
        let broker = NotificationBroker::new(Arc::new(tray.clone()));

        broker.add(Notification::warn("Pinned").with_duration(Duration::MAX));

        let next_year = Instant::now() + Duration::from_secs(60 * 60 * 24 * 365);
        let visible = tray.visible_at(next_year);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].message, "Pinned");
    }

    #[test]
    fn test_show_drops_expired_toasts() {
        let tray = ToastTray::new();
        tray.show(toast("stale", 0));
        tray.show(toast("fresh", 4000));

        assert_eq!(tray.lock().len(), 1);
        assert_eq!(tray.visible()[0].id, "fresh");
    }
}
