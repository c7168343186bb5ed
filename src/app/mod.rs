//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (`main.rs`) and the domain, client, and UI
//! layers. Control flows one way:
//!
//! ```text
//! User Input / Host Results → Events → handle_event → Component → Actions → Host Calls
//!                                 ↑                                              │
//!                                 └──────────── settlements (same id) ───────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event routing
//! - [`input`]: Input tracker (text field, counter, targets)
//! - [`orchestrator`]: Conversion orchestrator and output pane
//! - [`notifications`]: Single-slot notification queue
//! - [`clipboard`]: Copy-to-clipboard action
//! - [`modes`]: Orchestrator state machine
//! - [`state`]: State container and view model computation

pub mod actions;
pub mod clipboard;
pub mod handler;
pub mod input;
pub mod modes;
pub mod notifications;
pub mod orchestrator;
pub mod state;

pub use actions::Action;
pub use clipboard::CopyHandler;
pub use handler::{handle_event, Event};
pub use input::InputTracker;
pub use modes::UiState;
pub use notifications::NotificationQueue;
pub use orchestrator::{ConversionOrchestrator, OutputPane};
pub use state::AppState;
