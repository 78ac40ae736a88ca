//! Calculation error taxonomy.

use thiserror::Error;

/// Errors surfaced by a [`crate::engine::Reducer`], local or remote.
///
/// All variants map to a 500 response with the display string in the
/// `error` field; malformed request bodies never reach the reducer and are
/// handled separately as 400s.
#[derive(Debug, Error)]
pub enum CalcError {
    /// Input sequence exceeds the allowed length.
    #[error("size = {0} > 5")]
    InvalidSize(usize),

    /// A forbidden zero element was present.
    #[error("zero value found")]
    ZeroValue,

    /// The proxy could not reach the worker.
    #[error("worker request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The worker's response body could not be interpreted.
    #[error("worker response invalid: {0}")]
    Decode(String),

    /// The worker answered with its own error payload.
    #[error("worker error: {0}")]
    Upstream(String),
}
