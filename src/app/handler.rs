//! Event handling and state transition logic.
//!
//! Every user action and every host settlement arrives as an [`Event`].
//! [`handle_event`] routes it to the component that owns the affected
//! surface and collects the actions the plugin runtime must perform.
//!
//! # Event Types
//!
//! - **Input**: `InsertChar`, `InsertNewline`, `Backspace`, `ClearInput`
//! - **Target selection**: `NextTarget`, `PreviousTarget`, `SelectTarget`
//! - **Triggers**: `ConvertRequested`, `CopyRequested`, `CloseFocus`
//! - **Host settlements**: `ConversionSettled`, `ClipboardSettled`, `Tick`,
//!   `PermissionsResult`
//!
//! # Example
//!
//! ```rust
//! use biztone::{handle_event, Action, AppState, Config, Event, Theme};
//!
//! let mut state = AppState::new(&Config::default(), Theme::default());
//! let now = chrono::Utc::now();
//!
//! handle_event(&mut state, &Event::InsertChar('h'), now)?;
//! handle_event(&mut state, &Event::NextTarget, now)?;
//! let (_, actions) = handle_event(&mut state, &Event::ConvertRequested, now)?;
//! assert!(matches!(actions[0], Action::SendConversion { request_id: 1, .. }));
//! # Ok::<(), biztone::BizToneError>(())
//! ```

use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{ConversionError, ConversionResult, NotificationKind};
use chrono::{DateTime, Utc};

/// Events triggered by user input or by the host settling a call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Appends a character to the input.
    InsertChar(char),
    /// Appends a line break to the input.
    InsertNewline,
    /// Removes the last input character.
    Backspace,
    /// Empties the input.
    ClearInput,

    /// Selects the next conversion target (wraps).
    NextTarget,
    /// Selects the previous conversion target (wraps).
    PreviousTarget,
    /// Selects the conversion target at a zero-based index.
    SelectTarget(usize),

    /// The convert trigger was activated.
    ConvertRequested,
    /// The copy trigger was activated.
    CopyRequested,
    /// Hides the plugin pane.
    CloseFocus,

    /// The host finished the conversion request `request_id`.
    ConversionSettled {
        /// Id from [`Action::SendConversion`].
        request_id: u64,
        /// Decoded outcome.
        outcome: std::result::Result<ConversionResult, ConversionError>,
    },

    /// The host finished clipboard write `copy_id`.
    ClipboardSettled {
        /// Id from [`Action::WriteClipboard`].
        copy_id: u64,
        /// `Err` carries the failure detail.
        outcome: std::result::Result<(), String>,
    },

    /// A timer requested via [`Action::ScheduleTick`] fired.
    Tick,

    /// The user answered the permission prompt.
    PermissionsResult {
        /// Whether web access (and command execution) was granted.
        granted: bool,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// `now` is the host's current time; it stamps notification expiry and
/// request deadlines.
///
/// # Returns
///
/// `(should_render, actions)`: whether any surface changed, and the side
/// effects to run in order.
///
/// # Errors
///
/// Returns [`crate::BizToneError::InvalidTransition`] if the orchestrator's
/// state machine is inconsistent. Conversion, validation, and clipboard
/// failures are handled here and never surface as errors.
pub fn handle_event(
    state: &mut AppState,
    event: &Event,
    now: DateTime<Utc>,
) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::InsertChar(c) => Ok((state.input.insert_char(*c), vec![])),
        Event::InsertNewline => Ok((state.input.insert_char('\n'), vec![])),
        Event::Backspace => Ok((state.input.backspace(), vec![])),
        Event::ClearInput => Ok((state.input.clear(), vec![])),

        Event::NextTarget => Ok((state.input.select_next_target(), vec![])),
        Event::PreviousTarget => Ok((state.input.select_previous_target(), vec![])),
        Event::SelectTarget(index) => Ok((state.input.select_target(*index), vec![])),

        Event::ConvertRequested => state.orchestrator.handle_convert_requested(
            &state.input,
            &mut state.notifications,
            &state.messages,
            now,
        ),
        Event::ConversionSettled {
            request_id,
            outcome,
        } => state.orchestrator.handle_settled(
            *request_id,
            outcome.clone(),
            &mut state.notifications,
            &state.messages,
            now,
        ),

        Event::CopyRequested => Ok(state.copier.handle_copy_requested(
            state.orchestrator.output(),
            &mut state.notifications,
            &state.messages,
            now,
        )),
        Event::ClipboardSettled { copy_id, outcome } => Ok(state.copier.handle_settled(
            *copy_id,
            outcome.clone(),
            &mut state.notifications,
            &state.messages,
            now,
        )),

        Event::Tick => {
            let (timed_out, actions) =
                state
                    .orchestrator
                    .tick(&mut state.notifications, &state.messages, now)?;
            let dismissed = state.notifications.tick(now);
            Ok((timed_out || dismissed, actions))
        }

        Event::PermissionsResult { granted: true } => {
            tracing::debug!("permissions granted");
            Ok((false, vec![]))
        }
        Event::PermissionsResult { granted: false } => {
            tracing::warn!("permissions denied - conversions and copying will fail");
            let tick = state.notifications.show(
                state.messages.permission_denied.clone(),
                NotificationKind::Error,
                now,
            );
            Ok((true, vec![tick]))
        }

        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::UiState;
    use crate::ui::Theme;
    use crate::Config;
    use chrono::{Duration, TimeZone};

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).single().unwrap_or_default()
    }

    fn state() -> AppState {
        AppState::new(&Config::default(), Theme::default())
    }

    fn run(state: &mut AppState, events: &[Event], now: DateTime<Utc>) -> Vec<Action> {
        events
            .iter()
            .flat_map(|e| handle_event(state, e, now).unwrap().1)
            .collect()
    }

    #[test]
    fn typing_renders_and_updates_counter() {
        let mut s = state();
        let (render, actions) = handle_event(&mut s, &Event::InsertChar('a'), at(0)).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(s.input.counter_label(), "1 / 500");

        handle_event(&mut s, &Event::InsertNewline, at(0)).unwrap();
        assert_eq!(s.input.current_input(), "a\n");
    }

    #[test]
    fn typing_continues_while_submitting() {
        let mut s = state();
        run(
            &mut s,
            &[Event::InsertChar('a'), Event::NextTarget, Event::ConvertRequested],
            at(0),
        );
        assert!(s.orchestrator.is_busy());

        let (render, _) = handle_event(&mut s, &Event::InsertChar('b'), at(1)).unwrap();
        assert!(render);
        assert_eq!(s.input.counter_label(), "2 / 500");
    }

    #[test]
    fn tick_drives_both_timeout_and_dismissal() {
        let mut s = state();
        let actions = run(
            &mut s,
            &[Event::InsertChar('a'), Event::NextTarget, Event::ConvertRequested],
            at(0),
        );
        assert!(actions.contains(&Action::ScheduleTick { after_secs: 30.0 }));

        let (render, actions) = handle_event(&mut s, &Event::Tick, at(30)).unwrap();
        assert!(render);
        assert_eq!(s.orchestrator.ui_state(), UiState::Failed);
        assert_eq!(actions, vec![Action::ScheduleTick { after_secs: 3.0 }]);

        let (render, _) = handle_event(&mut s, &Event::Tick, at(33)).unwrap();
        assert!(render);
        assert!(s.notifications.visible().is_none());
    }

    #[test]
    fn timeout_disabled_schedules_no_deadline() {
        let config = Config {
            request_timeout_secs: 0,
            ..Config::default()
        };
        let mut s = AppState::new(&config, Theme::default());
        let actions = run(
            &mut s,
            &[Event::InsertChar('a'), Event::NextTarget, Event::ConvertRequested],
            at(0),
        );
        assert_eq!(actions.len(), 1);

        handle_event(&mut s, &Event::Tick, at(0) + Duration::days(1)).unwrap();
        assert!(s.orchestrator.is_busy());
    }

    #[test]
    fn denied_permission_is_reported() {
        let mut s = state();
        let (render, _) =
            handle_event(&mut s, &Event::PermissionsResult { granted: false }, at(0)).unwrap();
        assert!(render);
        assert_eq!(
            s.notifications.visible().map(|n| n.message.clone()),
            Some(s.messages.permission_denied.clone())
        );

        let (render, _) =
            handle_event(&mut s, &Event::PermissionsResult { granted: true }, at(0)).unwrap();
        assert!(!render);
    }

    #[test]
    fn close_focus_is_forwarded() {
        let mut s = state();
        let (render, actions) = handle_event(&mut s, &Event::CloseFocus, at(0)).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
