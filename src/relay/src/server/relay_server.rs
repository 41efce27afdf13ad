use crate::config::Config;
use crate::server::app::get_router;
use crate::server::state::RelayState;
use anyhow::Context;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

pub struct RelayServer {
    state: RelayState,
    listener: TcpListener,
}

impl RelayServer {
    pub async fn bind(config: Config) -> anyhow::Result<Self> {
        let addr = config.listen_address();
        let state = RelayState::new(config)?;

        match TcpListener::bind(&addr).await {
            Ok(listener) => Ok(Self { state, listener }),
            Err(e) if e.kind() == std::io::ErrorKind::AddrInUse => {
                anyhow::bail!(
                    "Failed to start relay: {} is already in use.\n\nStop the process holding the port or set PORT to a free one.",
                    addr
                );
            }
            Err(e) => anyhow::bail!("Failed to bind to address {}: {}", addr, e),
        }
    }

    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Serves until `cancellation_token` is cancelled, then drains in-flight requests.
    pub async fn run(self, cancellation_token: CancellationToken) -> anyhow::Result<()> {
        let router = get_router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(cancellation_token.cancelled_owned())
            .await
            .context("relay server stopped unexpectedly")?;

        debug!("RelayServer stopped");
        Ok(())
    }

    pub async fn run_until_signal(self) -> anyhow::Result<()> {
        self.run(shutdown_on_signal()).await
    }
}

/// Token cancelled on Ctrl-C or, on unix, SIGTERM.
fn shutdown_on_signal() -> CancellationToken {
    let cancellation_token = CancellationToken::new();

    let ctrl_c_token = cancellation_token.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Shutdown signal received");
                ctrl_c_token.cancel();
            }
            Err(e) => error!("Failed to listen for shutdown signal: {}", e),
        }
    });

    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                let sigterm_token = cancellation_token.clone();
                tokio::spawn(async move {
                    if sigterm.recv().await.is_some() {
                        info!("SIGTERM received");
                        sigterm_token.cancel();
                    }
                });
            }
            Err(e) => error!("Failed to set up SIGTERM handler: {}", e),
        }
    }

    cancellation_token
}
