use std::path::PathBuf;

use crate::config::Config;
use crate::constants::{
    DEFAULT_FLUME_HOST, DEFAULT_FLUME_PORT, DEFAULT_LISTEN_HOST, DEFAULT_LISTEN_PORT,
    DEFAULT_PUBLIC_DIR,
};

impl Default for Config {
    fn default() -> Self {
        Self {
            flume_host: DEFAULT_FLUME_HOST.to_string(),
            flume_port: DEFAULT_FLUME_PORT,

            listen_host: DEFAULT_LISTEN_HOST.to_string(),
            port: DEFAULT_LISTEN_PORT,

            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),

            request_timeout_ms: None,
            log_dir: None,
        }
    }
}
