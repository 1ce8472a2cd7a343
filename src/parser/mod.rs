//! HTTP request parser module.
//!
//! Turns the bytes received on a connection into an [`HttpRequest`]. The parser is
//! deliberately lenient: it only insists on a request line made of exactly three tokens.

mod request;
mod error;

// Re-export public items
pub use request::HttpRequest;
pub use error::Error;

// Re-export the parse_request function
pub use request::parse_request;
