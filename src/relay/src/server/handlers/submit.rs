use super::relay::{relay_body, RelayMessages};
use crate::envelope::EventType;
use crate::server::state::RelayState;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::Response;

pub const SUBMIT_ENDPOINT: &str = "/api/submit";

const MESSAGES: RelayMessages = RelayMessages {
    success: "Form submitted successfully and logged to Flume",
    delivery_failed: "Form submitted but failed to log to Flume",
    error: "Error processing form submission",
};

pub async fn submit(State(state): State<RelayState>, body: Bytes) -> Response {
    relay_body(&state, &body, EventType::UserInteraction, &MESSAGES).await
}
