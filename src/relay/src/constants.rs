pub const DEFAULT_FLUME_HOST: &str = "localhost";
pub const DEFAULT_FLUME_PORT: u16 = 44444;
pub const DEFAULT_LISTEN_HOST: &str = "0.0.0.0";
pub const DEFAULT_LISTEN_PORT: u16 = 3000;
/// Resolved against the working directory.
pub const DEFAULT_PUBLIC_DIR: &str = "public";

pub const INDEX_FILE: &str = "index.html";
pub const LOG_FILE_NAME: &str = "relay.log";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Tag stamped on every envelope as its `source`.
pub const EVENT_SOURCE: &str = "web-app";
pub const UNKNOWN_USER_AGENT: &str = "unknown";
