//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use async_trait::async_trait;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use opentelemetry::global;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::propagation::TraceContextPropagator;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tokio::net::TcpListener;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use calc_relay::engine::{CalcEngine, Pacer};
use calc_relay::http::{proxy_router, worker_router};
use calc_relay::worker_client::WorkerClient;

static INIT: Once = Once::new();

/// Install the W3C propagator and an in-process tracer provider so spans
/// are valid (and traceparent headers get injected) without exporting
/// anywhere.
pub fn init_tracing() {
    INIT.call_once(|| {
        global::set_text_map_propagator(TraceContextPropagator::new());
        let provider = SdkTracerProvider::builder().build();
        global::set_tracer_provider(provider.clone());
        let tracer = provider.tracer("calc-relay-tests");
        let _ = tracing_subscriber::registry()
            .with(tracing_opentelemetry::OpenTelemetryLayer::new(tracer))
            .try_init();
    });
}

/// Pacer that returns immediately, keeping end-to-end tests fast.
pub struct NoopPacer;

#[async_trait]
impl Pacer for NoopPacer {
    async fn pause(&self, _duration: Duration) {}
}

/// Bind an ephemeral port and serve the router in the background.
pub async fn spawn(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    addr
}

/// Start a worker with a no-op pacer.
#[allow(dead_code)]
pub async fn spawn_worker() -> SocketAddr {
    init_tracing();
    let engine = CalcEngine::with_pacer(Arc::new(NoopPacer));
    spawn(worker_router(Arc::new(engine))).await
}

/// Start a proxy pointed at the given worker address.
#[allow(dead_code)]
pub async fn spawn_proxy(worker_addr: SocketAddr) -> SocketAddr {
    init_tracing();
    let client = WorkerClient::new(&worker_addr.ip().to_string(), worker_addr.port()).unwrap();
    spawn(proxy_router(Arc::new(client))).await
}

/// Start a fake worker that records inbound headers and answers `/summ`
/// with a fixed status and JSON body.
#[allow(dead_code)]
pub async fn spawn_capturing_worker(
    status: StatusCode,
    body: serde_json::Value,
) -> (SocketAddr, Arc<Mutex<Option<HeaderMap>>>) {
    let captured = Arc::new(Mutex::new(None));
    let seen = captured.clone();
    let router = Router::new().route(
        "/summ",
        post(move |headers: HeaderMap| {
            let seen = seen.clone();
            let body = body.clone();
            async move {
                *seen.lock().unwrap() = Some(headers);
                (status, Json(body))
            }
        }),
    );
    let addr = spawn(router).await;
    (addr, captured)
}
