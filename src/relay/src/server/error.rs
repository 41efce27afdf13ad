use std::fmt;

/// Failures caught at the endpoint boundary before anything is delivered
#[derive(Debug)]
pub enum RelayError {
    /// Request body is not valid JSON
    InvalidBody(serde_json::Error),
}

impl fmt::Display for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelayError::InvalidBody(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for RelayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RelayError::InvalidBody(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(err: serde_json::Error) -> Self {
        RelayError::InvalidBody(err)
    }
}
