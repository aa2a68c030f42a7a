//! For reading application configuration.

use serde::Deserialize;
use std::time::Duration;

/// Application configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Display client configuration.
    pub display: DisplayConfig,
}

/// Server configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Server address.
    pub http_address: String,
    /// Server http port.
    pub http_port: u16,
    /// How long a request may take before it is aborted.
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,
    /// Maximum number of requests handled at once.
    pub concurrency_limit: usize,
}

impl ServerConfig {
    /// The address to bind, as `host:port`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.http_address, self.http_port)
    }
}

/// Display client configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct DisplayConfig {
    /// Where the greeting service is reachable.
    pub base_url: String,
}

/// Retrieve [`Config`] from the defaults, an optional `config` file and the environment.
#[tracing::instrument]
pub fn load_config() -> Result<Config, config::ConfigError> {
    let config = config::Config::builder()
        .set_default("server.http_address", "127.0.0.1")?
        .set_default("server.http_port", 8080_i64)?
        .set_default("server.request_timeout", "10s")?
        .set_default("server.concurrency_limit", 500_i64)?
        .set_default("display.base_url", "http://127.0.0.1:8080")?
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::with_prefix("app").separator("__"))
        .build()?
        .try_deserialize()?;
    Ok(config)
}
