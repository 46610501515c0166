//! HTTP API handlers served next to the Dioxus app

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    started: Arc<Instant>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            started: Arc::new(Instant::now()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub status: &'static str,
    pub version: &'static str,
    pub git_sha: &'static str,
    pub uptime_secs: u64,
}

/// GET /status - Service health check
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        service: "pictopy-landing",
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        git_sha: env!("LANDING_GIT_SHA"),
        uptime_secs: state.started.elapsed().as_secs(),
    })
}

/// API routes; the Dioxus app is merged in by the binary.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/status", get(status_handler))
        .with_state(state)
}
