//! HTTP endpoints.
//!
//! - `/healthz` : liveness
//! - `/metrics` : Prometheus text format (scrape)
//! - `/metric`  : push update, status-only response

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bytes::Bytes;

use pushgauge_core::error::{ClientCode, PushGaugeError};
use pushgauge_core::protocol::exposition;

use crate::app_state::AppState;

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let body = state.registry().render_all();

    (
        StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, exposition::CONTENT_TYPE)],
        body,
    )
        .into_response()
}

pub async fn push(State(state): State<AppState>, body: Bytes) -> StatusCode {
    match state.dispatcher().dispatch(&body) {
        Ok(()) => StatusCode::OK,
        Err(e) => status_for(&e),
    }
}

/// Malformed payloads answer 500, matching the push contract.
fn status_for(err: &PushGaugeError) -> StatusCode {
    match err.client_code() {
        ClientCode::NotFound => StatusCode::NOT_FOUND,
        ClientCode::BadRequest | ClientCode::Config | ClientCode::Internal => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
