use super::{Envelope, EventType};
use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FlumeHeaders {
    pub event_type: EventType,
    pub source: String,
    pub user_agent: String,
    pub timestamp: String,
}

/// One record of Flume's JSON HTTP source: string headers plus a base64 body holding the
/// JSON-encoded [`Envelope`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FlumeEvent {
    pub headers: FlumeHeaders,
    pub body: String,
}

impl TryFrom<&Envelope> for FlumeEvent {
    type Error = serde_json::Error;

    fn try_from(envelope: &Envelope) -> Result<Self, Self::Error> {
        let body = serde_json::to_vec(envelope)?;

        Ok(Self {
            headers: FlumeHeaders {
                event_type: envelope.event_type,
                source: envelope.source.clone(),
                user_agent: envelope.user_agent.clone(),
                timestamp: envelope.iso_timestamp(),
            },
            body: STANDARD.encode(body),
        })
    }
}

impl FlumeEvent {
    pub fn decode_body(&self) -> Result<Envelope> {
        let raw = STANDARD
            .decode(&self.body)
            .context("flume event body is not valid base64")?;
        serde_json::from_slice(&raw).context("flume event body is not a JSON envelope")
    }
}

/// The exact payload POSTed to the agent: a batch holding just this envelope.
pub fn wire_payload(envelope: &Envelope) -> Result<Vec<FlumeEvent>, serde_json::Error> {
    Ok(vec![FlumeEvent::try_from(envelope)?])
}
