//! Artificial per-element latency, injected so tests stay fast.

use std::time::Duration;

use async_trait::async_trait;

/// Pause applied when an element equals `1`.
pub const LONG_PAUSE: Duration = Duration::from_secs(3);

/// Pause applied to every other accepted element.
pub const SHORT_PAUSE: Duration = Duration::from_millis(100);

/// Latency simulator used by the engine to make traces interesting.
///
/// Production wires [`TokioPacer`]; tests inject a fake that records the
/// requested pauses without waiting.
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self, duration: Duration);
}

/// Pacer backed by the tokio timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioPacer;

#[async_trait]
impl Pacer for TokioPacer {
    async fn pause(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
