use crate::server::state::RelayState;
use crate::server::structs::HealthResponse;
use axum::extract::State;
use axum::Json;

pub const HEALTH_ENDPOINT: &str = "/api/health";

/// Reports the configured agent address. The agent itself is not probed.
pub async fn health(State(state): State<RelayState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.config()))
}
