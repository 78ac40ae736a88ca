//! calc-proxy: edge service relaying reductions to a worker.
//!
//! `POST /summ` accepts the same request shape as the worker and forwards
//! it over HTTP with W3C trace-context propagation, so the worker's spans
//! nest under the proxy's.

use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use calc_relay::config::ProxyConfig;
use calc_relay::http::{proxy_router, serve};
use calc_relay::observability::init_telemetry;
use calc_relay::worker_client::WorkerClient;

#[derive(Parser)]
#[command(name = "calc-proxy")]
#[command(about = "Edge service: relays integer reductions to a calc-worker", long_about = None)]
struct Cli {
    /// Bind address.
    #[arg(short, long, default_value = "0.0.0.0:8081")]
    listen: String,

    /// Downstream worker host.
    #[arg(long, default_value = "localhost")]
    worker_host: String,

    /// Downstream worker port.
    #[arg(long, default_value_t = 8082)]
    worker_port: u16,

    /// OTLP gRPC endpoint for span export (e.g. http://localhost:4317).
    #[arg(long)]
    otlp_endpoint: Option<String>,

    /// Service name reported on exported spans.
    #[arg(long, default_value = "calc-proxy")]
    service_name: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = ProxyConfig {
        listen_address: cli.listen,
        worker_host: cli.worker_host,
        worker_port: cli.worker_port,
        otlp_endpoint: cli.otlp_endpoint,
        service_name: cli.service_name,
    };

    let _telemetry = init_telemetry(&config.service_name, config.otlp_endpoint.as_deref())?;

    tracing::info!(
        listen_address = %config.listen_address,
        worker_host = %config.worker_host,
        worker_port = config.worker_port,
        service_name = %config.service_name,
        "configuration loaded"
    );

    let client = WorkerClient::new(&config.worker_host, config.worker_port)?;
    let router = proxy_router(Arc::new(client));
    let listener = TcpListener::bind(&config.listen_address).await?;
    serve(router, listener).await?;

    tracing::info!("shutdown complete");
    Ok(())
}
