use crate::config::{Config, ConfigLoader};
use crate::logging::setup_logging;
use crate::server::RelayServer;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug, Clone)]
#[clap(
    name = "flume-relay",
    about = "Relays web app interactions and backend logs to a Flume agent",
    version
)]
pub struct Cli {
    /// TOML configuration file, layered under the environment
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Port to listen on; overrides PORT and the configuration file
    #[clap(long)]
    pub port: Option<u16>,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let config = ConfigLoader::load(self.config.as_deref())?;
        Ok(self.apply_overrides(config))
    }

    fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(port) = self.port {
            config.port = port;
        }
        config
    }
}

pub async fn run(cli: Cli) -> Result<()> {
    let config = cli.load_config()?;
    setup_logging(&config)?;

    info!("Web app starting on port {}", config.port);
    info!("Flume agent configured at {}", config.flume_address());

    let server = RelayServer::bind(config).await?;
    info!("Listening on {}", server.local_addr()?);

    server.run_until_signal().await
}
