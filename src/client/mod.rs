//! Outbound host calls: the conversion service and the clipboard.
//!
//! The application layer only ever asks for a conversion or a clipboard write
//! by emitting an [`crate::app::Action`]. This module encodes those requests into
//! the shapes Zellij's `web_request` and `run_command` take, and decodes their
//! result events back into typed outcomes.
//!
//! # Modules
//!
//! - `context`: call tagging used to route results back
//! - `conversion`: JSON request encoding and response decoding
//! - `clipboard`: clipboard command line and exit-status mapping
//! - `trace`: W3C `traceparent` propagation

pub mod clipboard;
pub mod context;
pub mod conversion;
pub mod trace;

pub use clipboard::{CommandCall, DEFAULT_CLIPBOARD_COMMAND};
pub use context::{CallContext, CallKind};
pub use conversion::{decode_response, encode_request, HttpCall};
pub use trace::TraceContext;
