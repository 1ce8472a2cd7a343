//! Static file server.
//!
//! The request pipeline is: receive, [`parse_request`](crate::parser::parse_request),
//! resolve the path under the document root, load it, frame the response, close.

mod config;
mod content_type;
mod error;
mod http_server;
mod resource;
mod response;

// Re-export public items
pub use config::ServerConfig;
pub use content_type::{CONTENT_TYPES, ReadMode, read_mode, resolve as resolve_content_type};
pub use error::Error;
pub use http_server::{Accept, ConnectionOutcome, DEFAULT_DOCUMENT, ERROR_PAGE, HttpServer, shutdown_signal};
pub use resource::{DOCUMENT_ROOT, Resource, ResourceLoader};
pub use response::{HttpResponse, SERVER_NAME, StatusCode, build_bad_request, build_not_found, build_ok};
