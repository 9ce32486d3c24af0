//! Subscriber setup: level filter, stderr warnings, and OTLP file export.

use super::tracer::{self, SCOPE_NAME};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// File name of the span export inside the data directory.
pub const TRACE_FILE_NAME: &str = "reactor-explorer-otlp.json";

/// Level used when neither `RUST_LOG` nor the configuration names one.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over `config.trace_level`. Warnings and errors are also
/// printed to stderr. Spans are exported to
/// `<data_dir>/reactor-explorer-otlp.json`. Every failure is silent, and only
/// the first call takes effect.
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_TRACE_LEVEL);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(LevelFilter::WARN);

    let data_dir = config.data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .try_init();
        return;
    }

    let resource = Resource::new(vec![
        opentelemetry::KeyValue::new("service.name", SCOPE_NAME),
        opentelemetry::KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SCOPE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(otel_layer)
        .try_init();
}
