//! Transient notifications for user feedback after a mutation.
//!
//! Notifications are cosmetic: they report that something happened and then
//! disappear. The library holds no timers; callers pass the current time to
//! [Notification::is_expired] and drop the notification when it reports
//! expiry or when the user dismisses it early.

use time::{Duration, OffsetDateTime};

/// How long a notification is shown before it dismisses itself.
pub const DISMISS_AFTER: Duration = Duration::seconds(3);

/// Notification types for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// A mutation succeeded.
    Success,
    /// Something went wrong and the user should retry.
    Error,
}

/// A short-lived message shown after a user action.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Whether this reports a success or a failure.
    pub kind: NotificationKind,
    /// The message shown to the user.
    pub message: String,
    raised_at: OffsetDateTime,
}

impl Notification {
    /// Create a new success notification raised at `raised_at`.
    pub fn success(message: &str, raised_at: OffsetDateTime) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.to_owned(),
            raised_at,
        }
    }

    /// Create a new error notification raised at `raised_at`.
    pub fn error(message: &str, raised_at: OffsetDateTime) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.to_owned(),
            raised_at,
        }
    }

    /// When the notification was raised.
    pub fn raised_at(&self) -> OffsetDateTime {
        self.raised_at
    }

    /// Whether the notification has outlived [DISMISS_AFTER] and should be
    /// dropped.
    pub fn is_expired(&self, now: OffsetDateTime) -> bool {
        now - self.raised_at >= DISMISS_AFTER
    }
}
