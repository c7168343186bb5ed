//! Conversion orchestrator.
//!
//! Validates input, issues the conversion request, holds the busy state while
//! the host performs it, and dispatches the settled outcome to the output
//! pane and the notification queue.
//!
//! # Flow
//!
//! 1. [`ConversionOrchestrator::handle_convert_requested`] is a no-op while a
//!    request is in flight. Otherwise it validates the input: empty text or a
//!    missing target produce an error notification and nothing is sent.
//! 2. A valid request moves the state to `Submitting` and emits
//!    [`Action::SendConversion`] (plus a deadline timer when a timeout is set).
//! 3. [`ConversionOrchestrator::handle_settled`] consumes the outcome for the
//!    in-flight id. Success renders the converted text verbatim with no
//!    notification; failure renders a generic message in the output pane and
//!    puts the specific message in an error notification.
//! 4. Every settlement, including a local timeout, leaves `Submitting`, so the
//!    busy indicator always clears.

use super::actions::Action;
use super::input::InputTracker;
use super::modes::UiState;
use super::notifications::NotificationQueue;
use crate::domain::{
    BizToneError, ConversionError, ConversionErrorKind, ConversionRequest, ConversionResult,
    Messages, NotificationKind, Result, ValidationError,
};
use chrono::{DateTime, Duration, Utc};

/// Tolerance for the deadline timer firing slightly early.
const DEADLINE_SLACK_MS: i64 = 100;

/// Content of the output surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputPane {
    /// Nothing converted yet.
    #[default]
    Placeholder,

    /// Converted text exactly as returned by the service.
    Converted(String),

    /// Generic failure render after a failed conversion.
    Failed(String),
}

impl OutputPane {
    /// The text Copy may place on the clipboard.
    ///
    /// Only real converted content qualifies; placeholder and failure renders
    /// never do, and neither does an empty conversion.
    #[must_use]
    pub fn copyable_text(&self) -> Option<&str> {
        match self {
            Self::Converted(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InFlight {
    request_id: u64,
    deadline: Option<DateTime<Utc>>,
}

/// Owner of the busy state and the output surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOrchestrator {
    ui_state: UiState,
    output: OutputPane,
    in_flight: Option<InFlight>,
    next_request_id: u64,
    request_timeout: Option<Duration>,
}

impl ConversionOrchestrator {
    /// Creates an idle orchestrator. `request_timeout` of `None` waits forever.
    #[must_use]
    pub const fn new(request_timeout: Option<Duration>) -> Self {
        Self {
            ui_state: UiState::Idle,
            output: OutputPane::Placeholder,
            in_flight: None,
            next_request_id: 1,
            request_timeout,
        }
    }

    #[must_use]
    pub const fn ui_state(&self) -> UiState {
        self.ui_state
    }

    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.ui_state.is_busy()
    }

    #[must_use]
    pub const fn output(&self) -> &OutputPane {
        &self.output
    }

    /// Id of the request currently in flight, if any.
    #[must_use]
    pub fn in_flight_request(&self) -> Option<u64> {
        self.in_flight.map(|f| f.request_id)
    }

    /// Handles the convert trigger.
    ///
    /// Returns whether the surfaces changed and the actions to run.
    ///
    /// # Errors
    ///
    /// Returns [`BizToneError::InvalidTransition`] if the state machine is
    /// inconsistent; validation failures are not errors.
    pub fn handle_convert_requested(
        &mut self,
        input: &InputTracker,
        notifications: &mut NotificationQueue,
        messages: &Messages,
        now: DateTime<Utc>,
    ) -> Result<(bool, Vec<Action>)> {
        if !self.ui_state.accepts_convert() {
            tracing::debug!(
                request_id = ?self.in_flight_request(),
                "convert ignored while a request is in flight"
            );
            return Ok((false, vec![]));
        }

        let request = match ConversionRequest::new(input.trimmed_input(), input.selected_target()) {
            Ok(request) => request,
            Err(err) => {
                tracing::debug!(error = %BizToneError::from(err), "convert rejected by validation");
                let message = match err {
                    ValidationError::EmptyText => &messages.empty_input,
                    ValidationError::NoTarget => &messages.no_target,
                };
                let tick = notifications.show(message.clone(), NotificationKind::Error, now);
                return Ok((true, vec![tick]));
            }
        };

        self.ui_state = self.ui_state.transition(UiState::Submitting)?;

        let request_id = self.next_request_id;
        self.next_request_id += 1;

        let deadline = self.request_timeout.and_then(|t| {
            let deadline = now.checked_add_signed(t);
            if deadline.is_none() {
                tracing::debug!(
                    timeout_secs = t.num_seconds(),
                    "request timeout out of range, waiting without a deadline"
                );
            }
            deadline
        });
        self.in_flight = Some(InFlight {
            request_id,
            deadline,
        });

        tracing::debug!(
            request_id,
            target = %request.target(),
            text_len = request.text().chars().count(),
            "conversion submitted"
        );

        let mut actions = vec![Action::SendConversion {
            request_id,
            request,
        }];
        if let (Some(timeout), Some(_)) = (self.request_timeout, deadline) {
            #[allow(clippy::cast_precision_loss)]
            let after_secs = timeout.num_milliseconds() as f64 / 1000.0;
            actions.push(Action::ScheduleTick { after_secs });
        }

        Ok((true, actions))
    }

    /// Handles the settlement of request `request_id`.
    ///
    /// Settlements for any id other than the one in flight are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`BizToneError::InvalidTransition`] if the state machine is
    /// inconsistent.
    pub fn handle_settled(
        &mut self,
        request_id: u64,
        outcome: std::result::Result<ConversionResult, ConversionError>,
        notifications: &mut NotificationQueue,
        messages: &Messages,
        now: DateTime<Utc>,
    ) -> Result<(bool, Vec<Action>)> {
        if self.in_flight_request() != Some(request_id) {
            tracing::debug!(
                request_id,
                in_flight = ?self.in_flight_request(),
                "ignoring settlement for a request no longer in flight"
            );
            return Ok((false, vec![]));
        }

        self.in_flight = None;

        match outcome {
            Ok(result) => {
                self.ui_state = self.ui_state.transition(UiState::Succeeded)?;
                tracing::debug!(
                    request_id,
                    converted_len = result.converted_text.chars().count(),
                    "conversion succeeded"
                );
                self.output = OutputPane::Converted(result.converted_text);
                Ok((true, vec![]))
            }
            Err(err) => {
                self.ui_state = self.ui_state.transition(UiState::Failed)?;
                tracing::warn!(request_id, error = %BizToneError::from(err.clone()), "conversion failed");
                self.output = OutputPane::Failed(messages.conversion_failed.clone());
                let tick = notifications.show(err.message, NotificationKind::Error, now);
                Ok((true, vec![tick]))
            }
        }
    }

    /// Settles the in-flight request as timed out once its deadline passes.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Self::handle_settled`].
    pub fn tick(
        &mut self,
        notifications: &mut NotificationQueue,
        messages: &Messages,
        now: DateTime<Utc>,
    ) -> Result<(bool, Vec<Action>)> {
        let Some(InFlight {
            request_id,
            deadline: Some(deadline),
        }) = self.in_flight
        else {
            return Ok((false, vec![]));
        };

        if now + Duration::milliseconds(DEADLINE_SLACK_MS) < deadline {
            return Ok((false, vec![]));
        }

        tracing::debug!(request_id, "conversion deadline reached");
        let timeout = ConversionError::new(ConversionErrorKind::Timeout, messages.timed_out.clone());
        self.handle_settled(request_id, Err(timeout), notifications, messages, now)
    }
}
