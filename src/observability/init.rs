//! Subscriber and span-exporter bootstrap.
//!
//! Built once per process in `main`. The relay core only ever creates spans
//! and reads/writes headers; exporter wiring and its lifecycle live here.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry::{global, KeyValue};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::propagation::TraceContextPropagator;
use opentelemetry_sdk::trace::SdkTracerProvider;
use opentelemetry_sdk::Resource;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Flushes buffered spans when dropped. Hold it for the life of `main`.
pub struct TelemetryGuard {
    provider: Option<SdkTracerProvider>,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        if let Some(provider) = self.provider.take() {
            if let Err(err) = provider.shutdown() {
                eprintln!("telemetry shutdown failed: {err}");
            }
        }
    }
}

/// Initialize logging, span recording and the W3C propagator.
///
/// Spans are exported when `otlp_endpoint` is set; otherwise a
/// non-exporting provider backs them, so spans stay valid and
/// `traceparent` headers still survive the proxy→worker hop. The env
/// filter only gates the log output, never span recording.
pub fn init_telemetry(
    service_name: &str,
    otlp_endpoint: Option<&str>,
) -> Result<TelemetryGuard, opentelemetry_otlp::ExporterBuildError> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    let provider = match otlp_endpoint {
        Some(endpoint) => {
            let exporter = opentelemetry_otlp::SpanExporter::builder()
                .with_tonic()
                .with_endpoint(endpoint)
                .build()?;
            SdkTracerProvider::builder()
                .with_batch_exporter(exporter)
                .with_resource(
                    Resource::builder_empty()
                        .with_attributes(vec![
                            KeyValue::new("service.name", service_name.to_string()),
                            KeyValue::new("env", "stage"),
                        ])
                        .build(),
                )
                .build()
        }
        None => SdkTracerProvider::builder().build(),
    };
    global::set_tracer_provider(provider.clone());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "calc_relay=debug,tower_http=debug".into());
    let fmt_layer = tracing_subscriber::fmt::layer().with_filter(filter);

    let tracer = provider.tracer("calc-relay");
    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(tracing_opentelemetry::OpenTelemetryLayer::new(tracer))
        .init();

    Ok(TelemetryGuard {
        provider: Some(provider),
    })
}
