use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use config::{Config as RConfig, File};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_FLUME_HOST, DEFAULT_FLUME_PORT, DEFAULT_LISTEN_HOST, DEFAULT_LISTEN_PORT,
    DEFAULT_PUBLIC_DIR,
};

/// Environment variables and the configuration key each one overrides. Applied on top of
/// the config file.
pub const ENV_OVERRIDES: [(&str, &str); 7] = [
    ("FLUME_HOST", "flume_host"),
    ("FLUME_PORT", "flume_port"),
    ("PORT", "port"),
    ("LISTEN_HOST", "listen_host"),
    ("PUBLIC_DIR", "public_dir"),
    ("REQUEST_TIMEOUT_MS", "request_timeout_ms"),
    ("LOG_DIR", "log_dir"),
];

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Config {
    pub flume_host: String,
    pub flume_port: u16,

    pub listen_host: String,
    pub port: u16,

    pub public_dir: PathBuf,

    /// Upper bound for a single delivery; unset means the HTTP client default (no timeout).
    pub request_timeout_ms: Option<u64>,
    pub log_dir: Option<PathBuf>,
}

impl Config {
    /// `host:port` of the Flume agent, as reported by the health endpoint.
    pub fn flume_address(&self) -> String {
        format!("{}:{}", self.flume_host, self.flume_port)
    }

    pub fn flume_url(&self) -> String {
        format!("http://{}", self.flume_address())
    }

    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.listen_host, self.port)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads defaults, then `config_file` if given, then the process environment.
    pub fn load(config_file: Option<&Path>) -> Result<Config> {
        Self::load_with_env(config_file, |key| std::env::var(key).ok())
    }

    pub fn load_with_env<F>(config_file: Option<&Path>, lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = RConfig::builder();

        // set defaults
        builder = builder
            .set_default("flume_host", DEFAULT_FLUME_HOST)?
            .set_default("flume_port", i64::from(DEFAULT_FLUME_PORT))?
            .set_default("listen_host", DEFAULT_LISTEN_HOST)?
            .set_default("port", i64::from(DEFAULT_LISTEN_PORT))?
            .set_default("public_dir", DEFAULT_PUBLIC_DIR)?;

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).required(true));
        }

        // set overrides; empty values fall back to whatever is below them
        for (variable, key) in ENV_OVERRIDES {
            let value = lookup(variable).filter(|value| !value.trim().is_empty());
            builder = builder.set_override_option(key, value)?;
        }

        let config: Config = builder
            .build()
            .context("failed to read relay configuration")?
            .try_deserialize()
            .context("failed to parse relay configuration")?;

        Ok(config)
    }
}
