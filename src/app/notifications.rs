//! Notification queue with a single visible slot.
//!
//! At most one notification is visible. [`NotificationQueue::show`] replaces
//! whatever is in the slot and asks the host for a timer; [`NotificationQueue::tick`]
//! hides the slot only once *its* expiry is reached. A timer scheduled for an
//! older notification therefore finds a later expiry and leaves the newer
//! notification alone: the latest call wins and dismissal timers never stack.

use super::actions::Action;
use crate::domain::notification::DISPLAY_SECS;
use crate::domain::{Notification, NotificationKind};
use chrono::{DateTime, Duration, Utc};

/// Tolerance for host timers firing slightly before the requested delay.
const TIMER_SLACK_MS: i64 = 100;

/// Owner of the notification surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationQueue {
    visible: Option<Notification>,
}

impl NotificationQueue {
    #[must_use]
    pub const fn new() -> Self {
        Self { visible: None }
    }

    /// Shows `message`, replacing any visible notification.
    ///
    /// Returns the timer request that will dismiss it.
    #[must_use = "the returned action schedules the dismissal"]
    pub fn show(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        now: DateTime<Utc>,
    ) -> Action {
        let notification = Notification::new(message, kind, now);

        if let Some(previous) = &self.visible {
            tracing::debug!(replaced = %previous.message, "notification preempted");
        }
        tracing::debug!(message = %notification.message, kind = ?kind, "showing notification");

        self.visible = Some(notification);

        Action::ScheduleTick {
            after_secs: DISPLAY_SECS as f64,
        }
    }

    /// Hides the visible notification if it has expired at `now`.
    ///
    /// Returns `true` if the surface changed.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        let expired = self
            .visible
            .as_ref()
            .is_some_and(|n| n.is_expired(now, Duration::milliseconds(TIMER_SLACK_MS)));

        if expired {
            tracing::debug!("notification dismissed");
            self.visible = None;
        }
        expired
    }

    #[must_use]
    pub const fn visible(&self) -> Option<&Notification> {
        self.visible.as_ref()
    }
}
