//! Transient status notification model.

use chrono::{DateTime, Duration, Utc};

/// How long a notification stays visible.
pub const DISPLAY_SECS: i64 = 3;

/// Visual category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Neutral styling.
    Info,
    /// Positive outcome (e.g. text copied).
    Success,
    /// Validation, conversion, or clipboard failure.
    Error,
}

/// A single short-lived status message.
///
/// Created for every user-facing outcome event and hidden once `expiry` passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub expiry: DateTime<Utc>,
}

impl Notification {
    /// Creates a notification that expires [`DISPLAY_SECS`] after `now`.
    #[must_use]
    pub fn new(message: impl Into<String>, kind: NotificationKind, now: DateTime<Utc>) -> Self {
        Self {
            message: message.into(),
            kind,
            expiry: now + Duration::seconds(DISPLAY_SECS),
        }
    }

    /// Returns `true` once `now` has reached the expiry, allowing `slack` for
    /// timers that fire slightly early.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>, slack: Duration) -> bool {
        now + slack >= self.expiry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).single().unwrap_or_default()
    }

    #[test]
    fn expiry_is_three_seconds_after_creation() {
        let n = Notification::new("hi", NotificationKind::Info, at(0));
        assert_eq!(n.expiry, at(3));
    }

    #[test]
    fn expiry_honours_slack() {
        let n = Notification::new("hi", NotificationKind::Error, at(0));
        let slack = Duration::milliseconds(100);
        assert!(!n.is_expired(at(2), slack));
        assert!(n.is_expired(at(3) - Duration::milliseconds(50), slack));
        assert!(n.is_expired(at(4), slack));
    }
}
