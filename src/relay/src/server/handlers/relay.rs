use crate::envelope::{Envelope, EventType};
use crate::exporters::flume_forward::DeliveryOutcome;
use crate::server::error::RelayError;
use crate::server::state::RelayState;
use crate::server::structs::RelayResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;
use tracing::error;

/// Response messages of one relay endpoint.
pub(super) struct RelayMessages {
    pub success: &'static str,
    pub delivery_failed: &'static str,
    pub error: &'static str,
}

/// Content type is not checked: any body that parses as JSON is an event.
pub(super) fn parse_event(body: &[u8]) -> Result<Value, RelayError> {
    Ok(serde_json::from_slice(body)?)
}

pub(super) async fn relay_event(
    state: &RelayState,
    event: Value,
    event_type: EventType,
) -> DeliveryOutcome {
    let envelope = Envelope::build(event, event_type);
    state.forwarder().deliver(&envelope).await
}

/// Parse, build, deliver, and map the outcome: 200 on delivery, 500 otherwise.
pub(super) async fn relay_body(
    state: &RelayState,
    body: &[u8],
    event_type: EventType,
    messages: &RelayMessages,
) -> Response {
    let event = match parse_event(body) {
        Ok(event) => event,
        Err(e) => {
            error!("{}: {}", messages.error, e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(RelayResponse::failed(messages.error, e.to_string())),
            )
                .into_response();
        }
    };

    match relay_event(state, event, event_type).await {
        DeliveryOutcome::Success => {
            (StatusCode::OK, Json(RelayResponse::delivered(messages.success))).into_response()
        }
        DeliveryOutcome::Failure { reason } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(RelayResponse::failed(messages.delivery_failed, reason)),
        )
            .into_response(),
    }
}
