#![allow(dead_code)]

use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use flume_relay::config::Config;
use flume_relay::envelope::FlumeEvent;
use flume_relay::server::RelayServer;
use serde_json::Value;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// A request as seen by the mock agent.
#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub content_type: Option<String>,
    pub body: Value,
}

impl ReceivedRequest {
    pub fn flume_events(&self) -> Vec<FlumeEvent> {
        serde_json::from_value(self.body.clone()).expect("agent received a non-Flume payload")
    }
}

#[derive(Clone)]
struct CollectorState {
    status: StatusCode,
    received: Arc<Mutex<Vec<ReceivedRequest>>>,
}

/// Stand-in for a Flume HTTP source answering every POST with a fixed status.
pub struct MockCollector {
    addr: SocketAddr,
    received: Arc<Mutex<Vec<ReceivedRequest>>>,
    handle: JoinHandle<()>,
}

impl MockCollector {
    pub async fn start(status: StatusCode) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = CollectorState {
            status,
            received: received.clone(),
        };
        let router = Router::new()
            .route("/", post(collect))
            .layer(DefaultBodyLimit::disable())
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            addr,
            received,
            handle,
        }
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    pub fn received(&self) -> Vec<ReceivedRequest> {
        self.received.lock().unwrap().clone()
    }
}

impl Drop for MockCollector {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn collect(
    State(state): State<CollectorState>,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string());
    let body = serde_json::from_slice(&body).unwrap_or(Value::Null);

    state
        .received
        .lock()
        .unwrap()
        .push(ReceivedRequest { content_type, body });
    state.status
}

/// A port nothing listens on.
pub fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

pub fn relay_config(flume_port: u16, public_dir: &Path) -> Config {
    Config {
        flume_host: "127.0.0.1".to_string(),
        flume_port,
        listen_host: "127.0.0.1".to_string(),
        port: 0, // 0: port will be picked by the OS
        public_dir: public_dir.to_path_buf(),
        request_timeout_ms: Some(5_000),
        log_dir: None,
    }
}

pub struct TestRelay {
    addr: SocketAddr,
    cancellation_token: CancellationToken,
    handle: JoinHandle<anyhow::Result<()>>,
}

impl TestRelay {
    pub async fn start(config: Config) -> Self {
        let server = RelayServer::bind(config).await.unwrap();
        let addr = server.local_addr().unwrap();
        let cancellation_token = CancellationToken::new();
        let handle = tokio::spawn(server.run(cancellation_token.clone()));

        Self {
            addr,
            cancellation_token,
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Cancels the server and waits for it to drain.
    pub async fn stop(self) -> anyhow::Result<()> {
        self.cancellation_token.cancel();
        let joined = tokio::time::timeout(Duration::from_secs(10), self.handle).await?;
        joined?
    }
}
