//! Traced proxy/worker calculation services.
//!
//! Two binaries share this library: `calc-worker` sums or multiplies a
//! bounded list of integers, `calc-proxy` relays the same request to a
//! worker over HTTP. Both propagate W3C trace context so spans nest
//! across the network hop.

pub mod config;
pub mod engine;
pub mod http;
pub mod observability;
pub mod worker_client;

pub use config::schema::{ProxyConfig, WorkerConfig};
pub use engine::{CalcEngine, CalcError, Op, Reducer};
pub use worker_client::WorkerClient;
