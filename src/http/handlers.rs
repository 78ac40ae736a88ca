//! Relay handlers: parse a request, delegate to a reducer, map the outcome
//! to a response.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::Instrument;

use crate::engine::{Op, Reducer};
use crate::http::model::{CalcRequest, CalcResponse};
use crate::observability::propagation;

/// State shared by all routes of one service.
#[derive(Clone)]
pub struct AppState {
    pub reducer: Arc<dyn Reducer>,
    /// Worker-only branch: answer an empty list with a plain-text 400
    /// instead of running the reduction.
    pub reject_empty: bool,
}

pub async fn summ(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    relay(state, &headers, &body, Op::Sum).await
}

pub async fn multi(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    relay(state, &headers, &body, Op::Product).await
}

/// Shared relay logic for every route.
///
/// The span is parented from inbound `traceparent` headers so the worker's
/// spans nest under the proxy's client span. Parse failures answer 400 with
/// the parse message verbatim and never touch the reducer; reducer failures
/// answer 500 with the error's display string.
async fn relay(state: AppState, headers: &HeaderMap, body: &[u8], op: Op) -> Response {
    let span = tracing::info_span!("relay", ?op, numbers = tracing::field::Empty);
    propagation::set_parent_from_headers(&span, headers);

    async move {
        let request: CalcRequest = match serde_json::from_slice(body) {
            Ok(request) => request,
            Err(err) => {
                tracing::error!(error = %err, "parse failed");
                return error_response(StatusCode::BAD_REQUEST, err.to_string());
            }
        };
        tracing::Span::current().record("numbers", tracing::field::debug(&request.numbers));

        if state.reject_empty && request.numbers.is_empty() {
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                "no numbers provided",
            )
                .into_response();
        }

        match state.reducer.reduce(&request.numbers, op).await {
            Ok(result) => (StatusCode::OK, Json(CalcResponse::Result { result })).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "reduce failed");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        }
    }
    .instrument(span)
    .await
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(CalcResponse::Error { error })).into_response()
}
