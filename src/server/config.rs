//! Server configuration.

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::server::error::Error;

/// HTTP server configuration.
///
/// Every field is optional when deserializing; missing fields take their default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// The address to bind to.
    pub addr: SocketAddr,
    /// The receive window for a single request.
    pub read_buffer_size: usize,
    /// How long to wait before retrying a failed accept.
    pub accept_retry_delay_ms: u64,
    /// Deadline for receiving the request, `None` waits forever.
    pub read_timeout_secs: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            read_buffer_size: 8192,
            accept_retry_delay_ms: 100,
            read_timeout_secs: Some(30),
        }
    }
}

impl ServerConfig {
    /// Parse and validate a configuration from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let json = tokio::fs::read_to_string(path).await?;
        Self::from_json_str(&json)
    }

    /// Reject values the server cannot work with.
    pub fn validate(&self) -> Result<(), Error> {
        // a zero-sized receive window reads 0 bytes and abandons every connection
        if self.read_buffer_size == 0 {
            return Err(Error::InvalidConfig("read_buffer_size must be greater than 0".to_string()));
        }
        Ok(())
    }

    pub fn accept_retry_delay(&self) -> Duration {
        Duration::from_millis(self.accept_retry_delay_ms)
    }

    pub fn read_timeout(&self) -> Option<Duration> {
        self.read_timeout_secs.map(Duration::from_secs)
    }
}
