//! Copy-to-clipboard action.
//!
//! Copying reads the output surface and only ever writes real converted
//! text. Outcomes are reported exclusively through the notification queue;
//! the conversion state is never touched.

use super::actions::Action;
use super::notifications::NotificationQueue;
use super::orchestrator::OutputPane;
use crate::domain::{BizToneError, Messages, NotificationKind};
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

/// Tracks clipboard writes handed to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyHandler {
    next_copy_id: u64,
    pending: BTreeSet<u64>,
}

impl Default for CopyHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl CopyHandler {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next_copy_id: 1,
            pending: BTreeSet::new(),
        }
    }

    /// Handles the copy trigger.
    ///
    /// With nothing copyable on screen this emits an error notification and
    /// no clipboard write. Otherwise it emits [`Action::WriteClipboard`].
    pub fn handle_copy_requested(
        &mut self,
        output: &OutputPane,
        notifications: &mut NotificationQueue,
        messages: &Messages,
        now: DateTime<Utc>,
    ) -> (bool, Vec<Action>) {
        let Some(text) = output.copyable_text() else {
            tracing::debug!("copy requested without converted text");
            let tick = notifications.show(messages.nothing_to_copy.clone(), NotificationKind::Error, now);
            return (true, vec![tick]);
        };

        let copy_id = self.next_copy_id;
        self.next_copy_id += 1;
        self.pending.insert(copy_id);

        tracing::debug!(copy_id, text_len = text.chars().count(), "clipboard write requested");

        (
            false,
            vec![Action::WriteClipboard {
                copy_id,
                text: text.to_string(),
            }],
        )
    }

    /// Handles the host's answer for clipboard write `copy_id`.
    ///
    /// Unknown ids are ignored.
    pub fn handle_settled(
        &mut self,
        copy_id: u64,
        outcome: Result<(), String>,
        notifications: &mut NotificationQueue,
        messages: &Messages,
        now: DateTime<Utc>,
    ) -> (bool, Vec<Action>) {
        if !self.pending.remove(&copy_id) {
            tracing::debug!(copy_id, "ignoring unknown clipboard settlement");
            return (false, vec![]);
        }

        let tick = match outcome {
            Ok(()) => {
                tracing::debug!(copy_id, "clipboard write succeeded");
                notifications.show(messages.copied.clone(), NotificationKind::Success, now)
            }
            Err(detail) => {
                tracing::warn!(copy_id, error = %BizToneError::Clipboard(detail), "clipboard write failed");
                notifications.show(messages.copy_failed.clone(), NotificationKind::Error, now)
            }
        };

        (true, vec![tick])
    }

    /// Number of clipboard writes awaiting an answer.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).single().unwrap_or_default()
    }

    #[test]
    fn placeholder_is_never_copied() {
        let mut copier = CopyHandler::new();
        let mut notes = NotificationQueue::new();
        let m = Messages::english();

        for pane in [
            OutputPane::Placeholder,
            OutputPane::Failed(m.conversion_failed.clone()),
            OutputPane::Converted(String::new()),
        ] {
            let (_, actions) = copier.handle_copy_requested(&pane, &mut notes, &m, now());
            assert!(!actions.iter().any(|a| matches!(a, Action::WriteClipboard { .. })));
            let note = notes.visible().unwrap();
            assert_eq!(note.kind, NotificationKind::Error);
            assert_eq!(note.message, m.nothing_to_copy);
        }
        assert_eq!(copier.pending(), 0);
    }

    #[test]
    fn converted_text_is_written_and_success_reported() {
        let mut copier = CopyHandler::new();
        let mut notes = NotificationQueue::new();
        let m = Messages::english();
        let pane = OutputPane::Converted("안녕하세요".to_string());

        let (_, actions) = copier.handle_copy_requested(&pane, &mut notes, &m, now());
        assert_eq!(
            actions,
            vec![Action::WriteClipboard {
                copy_id: 1,
                text: "안녕하세요".to_string()
            }]
        );
        assert!(notes.visible().is_none());

        let (render, _) = copier.handle_settled(1, Ok(()), &mut notes, &m, now());
        assert!(render);
        let note = notes.visible().unwrap();
        assert_eq!(note.kind, NotificationKind::Success);
        assert_eq!(note.message, m.copied);
    }

    #[test]
    fn rejected_write_reports_error() {
        let mut copier = CopyHandler::new();
        let mut notes = NotificationQueue::new();
        let m = Messages::english();
        let pane = OutputPane::Converted("text".to_string());

        copier.handle_copy_requested(&pane, &mut notes, &m, now());
        copier.handle_settled(1, Err("not found".to_string()), &mut notes, &m, now());

        let note = notes.visible().unwrap();
        assert_eq!(note.kind, NotificationKind::Error);
        assert_eq!(note.message, m.copy_failed);
        assert_eq!(copier.pending(), 0);
    }

    #[test]
    fn unknown_settlement_is_ignored() {
        let mut copier = CopyHandler::new();
        let mut notes = NotificationQueue::new();
        let (render, actions) =
            copier.handle_settled(5, Ok(()), &mut notes, &Messages::english(), now());
        assert!(!render);
        assert!(actions.is_empty());
        assert!(notes.visible().is_none());
    }
}
