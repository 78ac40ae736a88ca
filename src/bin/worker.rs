//! calc-worker: compute service reducing bounded integer lists.
//!
//! `POST /summ` sums the numbers, `POST /multi` multiplies them. Per-element
//! pauses and the contrived failure rules exist to make traces interesting.

use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use calc_relay::config::WorkerConfig;
use calc_relay::engine::CalcEngine;
use calc_relay::http::{serve, worker_router};
use calc_relay::observability::init_telemetry;

#[derive(Parser)]
#[command(name = "calc-worker")]
#[command(about = "Compute service: sums or multiplies integer lists over HTTP", long_about = None)]
struct Cli {
    /// Bind address.
    #[arg(short, long, default_value = "0.0.0.0:8082")]
    listen: String,

    /// OTLP gRPC endpoint for span export (e.g. http://localhost:4317).
    #[arg(long)]
    otlp_endpoint: Option<String>,

    /// Service name reported on exported spans.
    #[arg(long, default_value = "calc-worker")]
    service_name: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = WorkerConfig {
        listen_address: cli.listen,
        otlp_endpoint: cli.otlp_endpoint,
        service_name: cli.service_name,
    };

    let _telemetry = init_telemetry(&config.service_name, config.otlp_endpoint.as_deref())?;

    tracing::info!(
        listen_address = %config.listen_address,
        service_name = %config.service_name,
        "configuration loaded"
    );

    let router = worker_router(Arc::new(CalcEngine::new()));
    let listener = TcpListener::bind(&config.listen_address).await?;
    serve(router, listener).await?;

    tracing::info!("shutdown complete");
    Ok(())
}
