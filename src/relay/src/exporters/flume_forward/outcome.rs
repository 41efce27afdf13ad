use super::error::FlumeForwardResult;

/// What the relay endpoints see of a delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Success,
    Failure { reason: String },
}

impl DeliveryOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DeliveryOutcome::Success)
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            DeliveryOutcome::Success => None,
            DeliveryOutcome::Failure { reason } => Some(reason.as_str()),
        }
    }
}

impl From<FlumeForwardResult<()>> for DeliveryOutcome {
    fn from(result: FlumeForwardResult<()>) -> Self {
        match result {
            Ok(()) => DeliveryOutcome::Success,
            Err(e) => DeliveryOutcome::Failure {
                reason: e.to_string(),
            },
        }
    }
}
