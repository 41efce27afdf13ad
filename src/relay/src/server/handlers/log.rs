use super::relay::{relay_body, RelayMessages};
use crate::envelope::EventType;
use crate::server::state::RelayState;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::Response;

pub const LOG_ENDPOINT: &str = "/api/log";

const MESSAGES: RelayMessages = RelayMessages {
    success: "Log sent to Flume agent",
    delivery_failed: "Failed to send log to Flume",
    error: "Error sending log",
};

pub async fn log(State(state): State<RelayState>, body: Bytes) -> Response {
    relay_body(&state, &body, EventType::BackendLog, &MESSAGES).await
}
