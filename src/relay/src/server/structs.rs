use crate::config::Config;
use crate::utils::now_iso;
use serde::{Deserialize, Serialize};

/// Body returned by the relay endpoints. Success carries `timestamp`, failure carries `error`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RelayResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RelayResponse {
    pub fn delivered(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            timestamp: Some(now_iso()),
            error: None,
        }
    }

    pub fn failed(message: &str, error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            timestamp: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub flume_agent: String,
}

impl HealthResponse {
    pub fn healthy(config: &Config) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: now_iso(),
            flume_agent: config.flume_address(),
        }
    }
}
