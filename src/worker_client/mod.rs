//! Remote reducer: relays the reduction to the worker service over HTTP.

use std::time::Duration;

use async_trait::async_trait;
use axum::http::HeaderMap;
use tracing::Instrument;

use crate::engine::{CalcError, Op, Reducer};
use crate::http::model::{CalcRequest, CalcResponse};
use crate::observability::propagation;

/// End-to-end timeout for one worker call. Generous because the worker
/// pauses up to 3s per element.
const CALL_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the worker's reduction endpoints.
///
/// Implements [`Reducer`], so the proxy's relay handler cannot tell it apart
/// from a local engine. One instance is shared across requests; reqwest's
/// connection pool needs no extra synchronization.
pub struct WorkerClient {
    base_url: String,
    http: reqwest::Client,
}

impl WorkerClient {
    pub fn new(host: &str, port: u16) -> Result<Self, CalcError> {
        let http = reqwest::Client::builder().timeout(CALL_TIMEOUT).build()?;
        Ok(Self {
            base_url: format!("http://{host}:{port}"),
            http,
        })
    }

    fn endpoint(&self, op: Op) -> String {
        match op {
            Op::Sum => format!("{}/summ", self.base_url),
            Op::Product => format!("{}/multi", self.base_url),
        }
    }
}

#[async_trait]
impl Reducer for WorkerClient {
    /// POST the numbers to the worker and return its `result` field.
    ///
    /// The current trace context is injected into the outbound headers so
    /// the worker's spans nest under this client span. No retries.
    async fn reduce(&self, numbers: &[i64], op: Op) -> Result<i64, CalcError> {
        let url = self.endpoint(op);
        let span = tracing::info_span!(
            "worker_call",
            otel.kind = "client",
            http.method = "POST",
            http.url = %url,
            http.status_code = tracing::field::Empty,
        );

        async {
            let mut headers = HeaderMap::new();
            propagation::inject_context(&mut headers);

            let response = self
                .http
                .post(&url)
                .headers(headers)
                .json(&CalcRequest {
                    numbers: numbers.to_vec(),
                })
                .send()
                .await
                .map_err(|err| {
                    tracing::error!(error = %err, "worker request failed");
                    CalcError::Transport(err)
                })?;

            let status = response.status();
            tracing::Span::current().record("http.status_code", status.as_u16());

            let body = response.bytes().await.map_err(CalcError::Transport)?;
            match serde_json::from_slice::<CalcResponse>(&body) {
                Ok(CalcResponse::Result { result }) if status.is_success() => Ok(result),
                Ok(CalcResponse::Error { error }) => Err(CalcError::Upstream(error)),
                Ok(CalcResponse::Result { .. }) => Err(CalcError::Decode(format!(
                    "result body with unexpected status {status}"
                ))),
                Err(err) if status.is_success() => Err(CalcError::Decode(err.to_string())),
                Err(_) => Err(CalcError::Upstream(format!("worker answered {status}"))),
            }
        }
        .instrument(span)
        .await
    }
}
