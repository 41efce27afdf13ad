use super::relay::relay_event;
use crate::constants::UNKNOWN_USER_AGENT;
use crate::envelope::EventType;
use crate::exporters::flume_forward::DeliveryOutcome;
use crate::server::state::RelayState;
use crate::server::structs::RelayResponse;
use axum::extract::State;
use axum::http::header::USER_AGENT;
use axum::http::HeaderMap;
use axum::Json;
use serde_json::{json, Value};

pub const TEST_LOG_ENDPOINT: &str = "/api/test-log";

const SENT: &str = "Test log sent successfully";
const FAILED: &str = "Failed to send test log";

/// Always answers 200, even when delivery fails; `success` carries the outcome.
pub async fn test_log(
    State(state): State<RelayState>,
    headers: HeaderMap,
) -> Json<RelayResponse> {
    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .unwrap_or(UNKNOWN_USER_AGENT);

    let outcome = relay_event(&state, test_event(user_agent), EventType::TestLog).await;
    Json(test_log_response(outcome))
}

fn test_event(user_agent: &str) -> Value {
    json!({
        "level": "INFO",
        "message": "Test log message from web app",
        "component": "test-endpoint",
        "userAgent": user_agent,
    })
}

fn test_log_response(outcome: DeliveryOutcome) -> RelayResponse {
    match outcome {
        DeliveryOutcome::Success => RelayResponse {
            success: true,
            message: SENT.to_string(),
            timestamp: None,
            error: None,
        },
        DeliveryOutcome::Failure { reason } => RelayResponse::failed(FAILED, reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_carries_user_agent() {
        let event = test_event("test-client");
        assert_eq!(event["userAgent"], "test-client");
        assert_eq!(event["level"], "INFO");
        assert_eq!(event["component"], "test-endpoint");
    }

    #[test]
    fn test_success_response_has_no_error() {
        let response = test_log_response(DeliveryOutcome::Success);
        assert!(response.success);
        assert_eq!(response.message, SENT);
        assert_eq!(response.error, None);
        assert_eq!(response.timestamp, None);
    }

    #[test]
    fn test_failure_response_carries_reason() {
        let response = test_log_response(DeliveryOutcome::Failure {
            reason: "connection refused".to_string(),
        });
        assert!(!response.success);
        assert_eq!(response.message, FAILED);
        assert_eq!(response.error.as_deref(), Some("connection refused"));
    }
}
