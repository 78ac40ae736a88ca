//! JSON wire types shared by both services.

use serde::{Deserialize, Serialize};

/// Inbound request body: an ordered list of integers.
///
/// Order carries no meaning for sum or product but is preserved verbatim
/// in span attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalcRequest {
    pub numbers: Vec<i64>,
}

/// Outbound body: exactly one of `result` or `error`, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CalcResponse {
    Result { result: i64 },
    Error { error: String },
}
