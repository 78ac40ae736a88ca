//! Router construction and serve loop.

use std::sync::Arc;
use std::time::Duration;

use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::engine::Reducer;
use crate::http::handlers::{self, AppState};

/// Per-request timeout. The worker legitimately pauses up to 3s per
/// element, so this stays well above five long pauses.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Worker router: local reduction on `/summ` and `/multi`.
pub fn worker_router(reducer: Arc<dyn Reducer>) -> Router {
    build_router(reducer, true, true)
}

/// Proxy router: remote reduction on `/summ` only.
pub fn proxy_router(reducer: Arc<dyn Reducer>) -> Router {
    build_router(reducer, false, false)
}

fn build_router(reducer: Arc<dyn Reducer>, with_multi: bool, reject_empty: bool) -> Router {
    let state = AppState {
        reducer,
        reject_empty,
    };

    let mut router = Router::new().route("/summ", post(handlers::summ));
    if with_multi {
        router = router.route("/multi", post(handlers::multi));
    }

    router
        .with_state(state)
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(TraceLayer::new_for_http())
}

/// Run the service on the given listener until ctrl-c.
pub async fn serve(router: Router, listener: TcpListener) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!(address = %addr, "HTTP server starting");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("failed to install ctrl-c handler");
    }
}
