//! Notification value objects and the toast display facility.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Display duration used when a notification does not specify one.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(4000);

/// Label of the dismiss action shown next to every toast.
pub const DISMISS_LABEL: &str = "×";

/// Base visual class applied to every toast.
pub const BASE_CLASS: &str = "notification";

/// Severity of a notification; drives its visual class.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Success,
    Warn,
    Primary,
    Accent,
}

/// A request to show a transient message.
///
/// Has no identity: it is built, handed to the broker and discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    /// `None` renders with the neutral class.
    pub status: Option<Severity>,
    /// `None` falls back to the broker's default duration.
    pub duration: Option<Duration>,
}

impl Notification {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            duration: None,
        }
    }

    /// Shorthand for a `warn` notification, the severity used for every
    /// failure surfaced by the dispatcher and the session store.
    pub fn warn(message: impl Into<String>) -> Self {
        Self::new(message).with_status(Severity::Warn)
    }

    pub fn with_status(mut self, status: Severity) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Visual class derived from the severity.
    pub fn visual_class(&self) -> String {
        match self.status {
            Some(status) => format!("{}-{}", BASE_CLASS, status),
            None => format!("{}-neutral", BASE_CLASS),
        }
    }
}

/// One rendered notification as handed to the display facility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub message: String,
    pub action_label: String,
    pub duration: Duration,
    pub status: Option<Severity>,
    pub classes: Vec<String>,
}

/// Host facility that renders toasts.
///
/// Implementations decide how overlapping toasts behave; the broker does not
/// queue or deduplicate.
pub trait ToastDisplay: Send + Sync {
    fn show(&self, toast: Toast);
}
