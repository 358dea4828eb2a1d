//! Health check endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub provider: String,
}

/// Health check endpoint. An unconfigured provider does not make the
/// service unhealthy: routing still works, only provisioning is disabled.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let provider = if state.orchestrator.is_configured() {
        "configured"
    } else {
        "not_configured"
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        provider: provider.to_string(),
    })
}

/// Liveness probe (just returns 200 if the server is running)
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}
