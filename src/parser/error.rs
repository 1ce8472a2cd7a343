//! Error types for the HTTP parser.

use thiserror::Error;

/// Errors that can occur during HTTP request parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The request line does not split into method, path and version.
    #[error("Malformed request line: {0:?}")]
    MalformedRequest(String),
}
