//! Orchestrator state machine.
//!
//! The conversion orchestrator is always in exactly one [`UiState`]. The state
//! replaces ad hoc "loading" flags: the busy indicator and the convert
//! trigger's enabled state are both derived from it.
//!
//! ```text
//!            convert             settle ok
//!   Idle ─────────────▶ Submitting ─────────▶ Succeeded
//!                         ▲    │                  │
//!                         │    │ settle err       │ convert
//!                         │    ▼                  │
//!                         └─ Failed ◀─────────────┘ (via Submitting)
//! ```

use crate::domain::{BizToneError, Result};

/// Lifecycle of the current (or last) conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiState {
    /// Nothing has been converted yet.
    #[default]
    Idle,

    /// A request is in flight; the convert trigger is inert.
    Submitting,

    /// The last request produced converted text.
    Succeeded,

    /// The last request failed or timed out.
    Failed,
}

impl UiState {
    /// Moves to `to` if the edge exists.
    ///
    /// # Errors
    ///
    /// Returns [`BizToneError::InvalidTransition`] for any edge not drawn in the
    /// module diagram, including self-loops.
    pub fn transition(self, to: Self) -> Result<Self> {
        let allowed = matches!(
            (self, to),
            (Self::Idle | Self::Succeeded | Self::Failed, Self::Submitting)
                | (Self::Submitting, Self::Succeeded | Self::Failed)
        );

        if allowed {
            tracing::debug!(from = ?self, to = ?to, "ui state transition");
            Ok(to)
        } else {
            Err(BizToneError::InvalidTransition { from: self, to })
        }
    }

    /// Whether the busy indicator is on.
    #[must_use]
    pub const fn is_busy(self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Whether the convert trigger accepts input.
    #[must_use]
    pub const fn accepts_convert(self) -> bool {
        !self.is_busy()
    }
}
