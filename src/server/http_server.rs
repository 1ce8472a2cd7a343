//! HTTP server implementation.

use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::signal;
use log::{debug, info, warn, error};

use crate::parser::parse_request;
use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::resource::ResourceLoader;
use crate::server::response::{StatusCode, build_bad_request, build_not_found, build_ok};

/// Request path served when the client asks for `/`.
pub const DEFAULT_DOCUMENT: &str = "/index.html";

/// Page sent as the body of every 404 response.
pub const ERROR_PAGE: &str = "error/404.html";

/// A source of incoming connections.
pub trait Accept {
    type Stream: AsyncRead + AsyncWrite + Unpin + Send;

    /// Wait for the next connection.
    fn accept(&mut self) -> impl Future<Output = io::Result<(Self::Stream, SocketAddr)>> + Send;
}

impl Accept for TcpListener {
    type Stream = TcpStream;

    fn accept(&mut self) -> impl Future<Output = io::Result<(TcpStream, SocketAddr)>> + Send {
        TcpListener::accept(self)
    }
}

/// How a single connection ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionOutcome {
    /// A response with this status was sent.
    Served(StatusCode),
    /// Nothing was received in time, so nothing was sent.
    Abandoned,
}

/// A static file server.
///
/// Connections are handled strictly one after another: the next connection is only
/// accepted once the current one has been answered and closed.
pub struct HttpServer {
    /// The server configuration.
    pub config: ServerConfig,
    loader: ResourceLoader,
    error_page: PathBuf,
}

impl HttpServer {
    /// Create a new HTTP server serving `htdocs` with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self::with_paths(config, ResourceLoader::default(), ERROR_PAGE)
    }

    pub(crate) fn with_paths(config: ServerConfig, loader: ResourceLoader, error_page: impl Into<PathBuf>) -> Self {
        Self {
            config,
            loader,
            error_page: error_page.into(),
        }
    }

    /// The document root requests are resolved under.
    pub fn document_root(&self) -> &Path {
        self.loader.document_root()
    }

    /// Read the error page.
    pub async fn load_error_page(&self) -> Result<Vec<u8>, Error> {
        tokio::fs::read(&self.error_page).await.map_err(|source| Error::ErrorPageMissing {
            path: self.error_page.clone(),
            source,
        })
    }

    /// Open the listening socket.
    pub async fn bind(&self) -> Result<TcpListener, Error> {
        let addr = self.config.addr;
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| Error::TransportUnavailable { addr, source })?;
        info!("Server listening on http://{addr}", addr = listener.local_addr()?);
        Ok(listener)
    }

    /// Serve connections from `listener` until `shutdown` completes.
    ///
    /// The configuration and the error page are checked once before the first accept;
    /// either failing stops the server before any client is served. A failed accept is
    /// retried after `accept_retry_delay_ms`.
    pub async fn serve(&self, mut listener: impl Accept, shutdown: impl Future<Output = ()>) -> Result<(), Error> {
        self.config.validate()?;
        self.load_error_page().await?;
        info!(
            "Serving {root} (error page {page})",
            root = self.document_root().display(),
            page = self.error_page.display()
        );

        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("Shutting down server...");
                    break;
                }

                accept_result = listener.accept() => {
                    match accept_result {
                        Ok((mut socket, addr)) => {
                            self.serve_connection(&mut socket, addr).await;
                        }
                        Err(e) => {
                            debug!("Accept failed, retrying: {e}");
                            tokio::time::sleep(self.config.accept_retry_delay()).await;
                        }
                    }
                }
            }
        }

        info!("Server shutdown complete");
        Ok(())
    }

    async fn serve_connection(&self, socket: &mut (impl AsyncRead + AsyncWrite + Unpin), addr: SocketAddr) {
        debug!("Accepted connection from {addr}");
        match self.handle_connection(socket).await {
            Ok(ConnectionOutcome::Served(status)) => {
                debug!("Answered {addr} with {code}", code = status.as_u16());
            }
            Ok(ConnectionOutcome::Abandoned) => {
                debug!("Nothing received from {addr}, closing");
            }
            Err(e @ Error::ErrorPageMissing { .. }) => {
                error!("Cannot answer {addr}: {e}");
            }
            Err(e) => {
                warn!("Error handling connection from {addr}: {e}");
            }
        }
    }

    /// Handle a single connection: one receive, one response, then close.
    pub async fn handle_connection(
        &self,
        socket: &mut (impl AsyncRead + AsyncWrite + Unpin),
    ) -> Result<ConnectionOutcome, Error> {
        let mut buf = vec![0; self.config.read_buffer_size];

        let n = match self.config.read_timeout() {
            Some(limit) => match tokio::time::timeout(limit, socket.read(&mut buf)).await {
                Ok(read) => read?,
                Err(_) => {
                    warn!("No request received within {limit:?}");
                    return Ok(ConnectionOutcome::Abandoned);
                }
            },
            None => socket.read(&mut buf).await?,
        };

        if n == 0 {
            return Ok(ConnectionOutcome::Abandoned);
        }

        let (status, response) = self.respond(&buf[..n]).await?;

        socket.write_all(&response).await?;
        socket.shutdown().await?;

        Ok(ConnectionOutcome::Served(status))
    }

    /// Build the response bytes for a raw request.
    pub async fn respond(&self, raw: &[u8]) -> Result<(StatusCode, Vec<u8>), Error> {
        let request = match parse_request(raw) {
            Ok(request) => request,
            Err(e) => {
                warn!("{e}");
                return Ok((StatusCode::BadRequest, build_bad_request()));
            }
        };

        info!("{method} {path} {version}", method = request.method, path = request.path, version = request.version);

        let path = match request.target_path() {
            "/" => DEFAULT_DOCUMENT,
            path => path,
        };

        match self.loader.load(path).await {
            Some(resource) => Ok((StatusCode::Ok, build_ok(&resource.body, resource.mime))),
            None => {
                let page = self.load_error_page().await?;
                Ok((StatusCode::NotFound, build_not_found(&page)))
            }
        }
    }
}

/// Completes on Ctrl+C. If the handler cannot be installed, never completes.
pub async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C, initiating graceful shutdown"),
        Err(e) => {
            error!("Error setting up Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    }
}
