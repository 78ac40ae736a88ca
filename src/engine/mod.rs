//! Integer reduction engine and the `Reducer` seam.

mod calculator;
mod error;
mod pacer;

pub use calculator::CalcEngine;
pub use error::CalcError;
pub use pacer::{Pacer, TokioPacer, LONG_PAUSE, SHORT_PAUSE};

use async_trait::async_trait;

/// Largest accepted input length.
pub const MAX_INPUT_LEN: usize = 5;

/// Reduction operation over the input sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Sum,
    Product,
}

/// Capability to fold a bounded integer sequence into a single value.
///
/// The worker wires the local [`CalcEngine`]; the proxy wires a
/// [`crate::WorkerClient`] that performs the reduction on a remote worker.
/// Relay handlers only see this trait, so tests can substitute a
/// deterministic fake.
#[async_trait]
pub trait Reducer: Send + Sync {
    async fn reduce(&self, numbers: &[i64], op: Op) -> Result<i64, CalcError>;
}
