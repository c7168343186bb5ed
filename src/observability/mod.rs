//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! Spans land in `~/.local/share/zellij/biztone/biztone-otlp.json` (one
//! OTLP JSON document per line), rotated at 10 MB with three backups. The
//! level comes from the `trace_level` config key, default `info`.
//!
//! Outgoing conversion requests carry the active span as a W3C
//! `traceparent` header (see [`crate::client::TraceContext`]), so the
//! service can join the same trace.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`tracer`]: Tracer provider with the file exporter
//! - [`span_formatter`]: OTLP JSON serialization
//! - [`file_writer`]: Size-based rotating writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, TRACE_FILE_NAME};
