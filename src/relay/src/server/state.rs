use crate::config::Config;
use crate::exporters::flume_forward::FlumeForward;
use anyhow::Result;
use std::sync::Arc;

/// Shared by every request. Read-only after startup.
#[derive(Clone)]
pub struct RelayState {
    config: Arc<Config>,
    forwarder: FlumeForward,
}

impl RelayState {
    pub fn new(config: Config) -> Result<Self> {
        let forwarder = FlumeForward::try_new(&config)?;
        Ok(Self {
            config: Arc::new(config),
            forwarder,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn forwarder(&self) -> &FlumeForward {
        &self.forwarder
    }
}
