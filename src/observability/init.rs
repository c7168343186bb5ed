//! Tracing subscriber setup.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use std::path::Path;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "biztone-otlp.json";

/// Installs the global subscriber: `EnvFilter` from `config.trace_level`,
/// bridged to an OpenTelemetry provider writing to
/// `<data dir>/biztone-otlp.json`.
///
/// Observability is optional: if the data directory cannot be created the
/// plugin runs without tracing. Only the first call in a process takes
/// effect.
pub fn init_tracing(config: &Config) {
    init_tracing_in(&crate::infrastructure::paths::get_data_dir(), &config.trace_level);
}

fn init_tracing_in(data_dir: &Path, level: &str) {
    if std::fs::create_dir_all(data_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let resource = Resource::new(vec![
        opentelemetry::KeyValue::new("service.name", "BizTone"),
        opentelemetry::KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(tracer::SCOPE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
