//! Tracing bootstrap and trace-context propagation.
//!
//! # Data Flow
//! ```text
//! main → init.rs (subscriber, optional OTLP pipeline, W3C propagator)
//! proxy handler → propagation.rs inject  → traceparent header
//! worker handler ← propagation.rs extract ← traceparent header
//! ```

pub mod init;
pub mod propagation;

pub use init::{init_telemetry, TelemetryGuard};
