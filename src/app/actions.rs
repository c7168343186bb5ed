//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never talks to the host. It returns a `Vec<Action>` and
//! the plugin shim performs them in order: Zellij `web_request` for a
//! conversion, `run_command` for a clipboard write, `set_timeout` for a tick.
//! Results come back later as [`crate::app::Event`]s carrying the same id.
//!
//! # Example
//!
//! ```rust
//! use biztone::app::Action;
//!
//! let actions = vec![Action::ScheduleTick { after_secs: 3.0 }];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::domain::ConversionRequest;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// POSTs a conversion request to the configured endpoint.
    ///
    /// The answer must be fed back as [`crate::app::Event::ConversionSettled`]
    /// with the same `request_id`.
    SendConversion {
        /// Id of the request, echoed by the settlement.
        request_id: u64,
        /// Validated payload.
        request: ConversionRequest,
    },

    /// Writes text to the system clipboard.
    ///
    /// The answer must be fed back as [`crate::app::Event::ClipboardSettled`].
    WriteClipboard {
        /// Id of the write, echoed by the settlement.
        copy_id: u64,
        /// Exact text to place on the clipboard.
        text: String,
    },

    /// Requests a [`crate::app::Event::Tick`] after the given delay.
    ScheduleTick {
        /// Delay in seconds.
        after_secs: f64,
    },
}
