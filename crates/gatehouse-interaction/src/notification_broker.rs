//! Notification broker: turns notifications into toasts.

use std::sync::Arc;
use std::time::Duration;

use gatehouse_core::notification::{
    BASE_CLASS, DEFAULT_DURATION, DISMISS_LABEL, Notification, Toast, ToastDisplay,
};
use uuid::Uuid;

/// Fire-and-forget entry point for user notifications.
///
/// Each `add` produces exactly one toast; bursts are passed straight to the
/// display facility.
#[derive(Clone)]
pub struct NotificationBroker {
    display: Arc<dyn ToastDisplay>,
    default_duration: Duration,
}

impl NotificationBroker {
    pub fn new(display: Arc<dyn ToastDisplay>) -> Self {
        Self {
            display,
            default_duration: DEFAULT_DURATION,
        }
    }

    pub fn with_default_duration(mut self, duration: Duration) -> Self {
        if !duration.is_zero() {
            self.default_duration = duration;
        }
        self
    }

    pub fn add(&self, notification: Notification) {
        let toast = self.render(notification);
        tracing::debug!(
            "[NotificationBroker] Showing toast {} ({})",
            toast.id,
            toast.classes.join(" ")
        );
        self.display.show(toast);
    }

    fn render(&self, notification: Notification) -> Toast {
        // A zero duration would hide the toast immediately.
        let duration = notification
            .duration
            .filter(|d| !d.is_zero())
            .unwrap_or(self.default_duration);
        let classes = vec![BASE_CLASS.to_string(), notification.visual_class()];

        Toast {
            id: Uuid::new_v4().to_string(),
            message: notification.message,
            action_label: DISMISS_LABEL.to_string(),
            duration,
            status: notification.status,
            classes,
        }
    }
}
