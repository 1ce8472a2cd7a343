//! Starts the server on the configured port and serves `htdocs` until Ctrl+C.
//!
//! Usage: `basic-html-server [config.json]`

use std::process;

use log::error;

use basic_html_server::server::shutdown_signal;
use basic_html_server::{HttpServer, ServerConfig, ServerError, VERSION_FULL_NAME};

async fn run() -> Result<(), ServerError> {
    let config = match std::env::args_os().nth(1) {
        Some(path) => ServerConfig::load(path).await?,
        None => ServerConfig::default(),
    };

    let server = HttpServer::new(config);
    let listener = server.bind().await?;
    println!("Listening on port: {}", listener.local_addr()?.port());

    server.serve(listener, shutdown_signal()).await
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("{VERSION_FULL_NAME}");

    if let Err(e) = run().await {
        error!("{e}");
        eprintln!("{e}");
        process::exit(e.exit_code());
    }
}
