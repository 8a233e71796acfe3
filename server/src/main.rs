use std::{io, net::IpAddr, net::SocketAddr};

use clap::Parser;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::info;

use todo_server::{Config, TodoStore};

#[derive(Debug, Error)]
enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: io::Error },

    #[error("server error: {0}")]
    Serve(#[from] io::Error),
}

#[derive(Parser)]
#[command(name = "todo-server")]
#[command(version, about = "In-memory todo REST server", long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    port: u16,

    /// Path prefix for the todo routes
    #[arg(long, env = "BASE_PATH", default_value = "/")]
    base_path: String,
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let cli = Cli::parse();
    todo_server::init_tracing();

    let config = Config {
        host: cli.host,
        port: cli.port,
        base_path: cli.base_path,
    };
    let addr = config.addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!(
        "listening on http://{addr}{}",
        config.mount_point().unwrap_or_default()
    );

    let router = todo_server::router(&config, TodoStore::new());
    todo_server::run(listener, router).await?;
    Ok(())
}
