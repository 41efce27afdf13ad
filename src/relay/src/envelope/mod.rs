//! Envelopes wrap a caller-supplied event with the metadata the Flume agent indexes on.
//!
//! [`Envelope::build`] is the only constructor used by the relay; [`flume`] turns an
//! envelope into the record shape accepted by Flume's HTTP source.

mod event_type;
pub mod flume;

pub use event_type::EventType;
pub use flume::{wire_payload, FlumeEvent, FlumeHeaders};

use crate::constants::{EVENT_SOURCE, UNKNOWN_USER_AGENT};
use crate::utils::iso_timestamp;
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    #[serde(with = "crate::utils::iso_millis")]
    pub timestamp: DateTime<Utc>,
    pub event_type: EventType,
    pub data: Value,
    pub source: String,
    pub user_agent: String,
}

impl Envelope {
    pub fn build(data: Value, event_type: EventType) -> Self {
        Self::build_at(data, event_type, Utc::now())
    }

    /// Same as [`Envelope::build`] with a fixed clock. The timestamp is truncated to
    /// milliseconds so it survives a trip through the wire format unchanged.
    pub fn build_at(data: Value, event_type: EventType, now: DateTime<Utc>) -> Self {
        let user_agent = resolve_user_agent(&data);
        Self {
            timestamp: now.trunc_subsecs(3),
            event_type,
            data,
            source: EVENT_SOURCE.to_string(),
            user_agent,
        }
    }

    pub fn iso_timestamp(&self) -> String {
        iso_timestamp(&self.timestamp)
    }
}

/// `data.userAgent` when it is a non-empty string, `"unknown"` otherwise.
pub fn resolve_user_agent(data: &Value) -> String {
    data.get("userAgent")
        .and_then(Value::as_str)
        .filter(|user_agent| !user_agent.is_empty())
        .unwrap_or(UNKNOWN_USER_AGENT)
        .to_string()
}
