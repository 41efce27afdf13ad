use std::fmt;

/// Errors that can occur while delivering an envelope
#[derive(Debug)]
pub enum FlumeForwardError {
    /// Failed to serialize the envelope to JSON
    Serialization(serde_json::Error),

    /// Connection refused, DNS failure, timeout and other transport errors
    Network(reqwest::Error),

    /// Agent answered with a non-2XX status code
    Server { status: u16 },
}

impl fmt::Display for FlumeForwardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlumeForwardError::Serialization(e) => write!(f, "Failed to serialize event: {}", e),
            FlumeForwardError::Network(e) => {
                write!(f, "{}", e)?;
                let mut cause = std::error::Error::source(e);
                while let Some(inner) = cause {
                    write!(f, ": {}", inner)?;
                    cause = inner.source();
                }
                Ok(())
            }
            FlumeForwardError::Server { status } => {
                write!(f, "Flume agent responded with status: {}", status)
            }
        }
    }
}

impl std::error::Error for FlumeForwardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FlumeForwardError::Serialization(e) => Some(e),
            FlumeForwardError::Network(e) => Some(e),
            FlumeForwardError::Server { .. } => None,
        }
    }
}

impl From<serde_json::Error> for FlumeForwardError {
    fn from(err: serde_json::Error) -> Self {
        FlumeForwardError::Serialization(err)
    }
}

impl From<reqwest::Error> for FlumeForwardError {
    fn from(err: reqwest::Error) -> Self {
        FlumeForwardError::Network(err)
    }
}

impl FlumeForwardError {
    pub fn server_error(status: u16) -> Self {
        FlumeForwardError::Server { status }
    }
}

/// Result type for delivery operations
pub type FlumeForwardResult<T> = Result<T, FlumeForwardError>;
