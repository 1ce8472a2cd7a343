//! A minimal HTTP/1.1 static file server.
//!
//! Files are served from the fixed `htdocs` directory. The content type comes from the
//! file extension; unknown extensions, unreadable files and paths that try to leave the
//! document root all get the same 404 response built around `error/404.html`.
//!
//! Each connection carries exactly one request and is closed after the response, and
//! connections are served one at a time.
//!
//! # Examples
//!
//! ## Parsing a request
//!
//! ```
//! use basic_html_server::parse_request;
//!
//! let request = parse_request(b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n").unwrap();
//! assert_eq!(request.method, "GET");
//! assert_eq!(request.path, "/index.html");
//! // header values are kept exactly as received
//! assert_eq!(request.headers["Host"], " example.com");
//! ```
//!
//! ## Malformed request lines
//!
//! ```
//! use basic_html_server::{parse_request, ParserError};
//!
//! let result = parse_request(b"GET /index.html\r\n\r\n");
//! assert!(matches!(result, Err(ParserError::MalformedRequest(_))));
//! ```
//!
//! ## Framing a response
//!
//! ```
//! use basic_html_server::{build_ok, resolve_content_type};
//!
//! let mime = resolve_content_type("/style.css");
//! assert_eq!(mime, "text/css");
//!
//! let bytes = build_ok(b"body {}", mime);
//! assert!(bytes.starts_with(b"HTTP/1.1 200 OK\n"));
//! assert!(bytes.ends_with(b"\n\nbody {}\n "));
//! ```

pub mod parser;
pub mod server;

/// Name and version printed when the server starts.
pub const VERSION_FULL_NAME: &str = concat!("Basic HTML Server v", env!("CARGO_PKG_VERSION"));

// Re-export commonly used items for convenience
pub use parser::{Error as ParserError, HttpRequest, parse_request};
pub use server::{
    ConnectionOutcome, Error as ServerError, HttpResponse, HttpServer, ReadMode, Resource, ResourceLoader,
    ServerConfig, StatusCode, build_bad_request, build_not_found, build_ok, resolve_content_type,
};
