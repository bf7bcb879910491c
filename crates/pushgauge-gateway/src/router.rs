//! Axum router wiring.

use axum::{
    routing::{get, post},
    Router,
};

use crate::{app_state::AppState, ops};

pub const METRICS_PATH: &str = "/metrics";
pub const PUSH_PATH: &str = "/metric";

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(METRICS_PATH, get(ops::metrics))
        .route(PUSH_PATH, post(ops::push))
        .route("/healthz", get(ops::healthz))
        .with_state(state)
}
