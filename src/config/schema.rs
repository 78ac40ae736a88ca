//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Resolved settings for the worker service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WorkerConfig {
    /// Bind address (e.g. "0.0.0.0:8082").
    pub listen_address: String,

    /// OTLP gRPC endpoint for span export; tracing stays local when unset.
    pub otlp_endpoint: Option<String>,

    /// Name reported on exported spans.
    pub service_name: String,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            listen_address: "0.0.0.0:8082".to_string(),
            otlp_endpoint: None,
            service_name: "calc-worker".to_string(),
        }
    }
}

/// Resolved settings for the proxy service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProxyConfig {
    /// Bind address (e.g. "0.0.0.0:8081").
    pub listen_address: String,

    /// Downstream worker host.
    pub worker_host: String,

    /// Downstream worker port.
    pub worker_port: u16,

    /// OTLP gRPC endpoint for span export; tracing stays local when unset.
    pub otlp_endpoint: Option<String>,

    /// Name reported on exported spans.
    pub service_name: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            listen_address: "0.0.0.0:8081".to_string(),
            worker_host: "localhost".to_string(),
            worker_port: 8082,
            otlp_endpoint: None,
            service_name: "calc-proxy".to_string(),
        }
    }
}
