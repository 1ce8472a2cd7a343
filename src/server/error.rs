//! Error types for the HTTP server.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during HTTP server operation.
#[derive(Debug, Error)]
pub enum Error {
    /// The listening socket could not be opened.
    #[error("Cannot listen on {addr}: {source}")]
    TransportUnavailable {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The page served with 404 responses cannot be read.
    #[error("Error page {path} cannot be loaded: {source}")]
    ErrorPageMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration document.
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// A configuration value outside its allowed range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Process exit status for this error when it ends the server.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::TransportUnavailable { .. } => 2,
            Error::ErrorPageMissing { .. } => 3,
            _ => 1,
        }
    }
}
