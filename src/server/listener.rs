use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket};
use tracing::info;

use crate::config::{Config, LimitsConfig, StaticFilesConfig};
use crate::http::connection::Connection;

/// Binds the listening socket with reuse-address and the configured backlog.
pub fn bind(cfg: &Config) -> anyhow::Result<TcpListener> {
    let addr: SocketAddr = cfg
        .server
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address {}", cfg.server.listen_addr))?;

    let socket = if addr.is_ipv4() {
        TcpSocket::new_v4()?
    } else {
        TcpSocket::new_v6()?
    };
    socket.set_reuseaddr(true)?;
    socket.bind(addr)?;

    Ok(socket.listen(cfg.server.backlog)?)
}

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = bind(cfg)?;
    info!("Listening on {}", listener.local_addr()?);

    serve(listener, cfg.static_files.clone(), cfg.limits.clone()).await
}

/// Accept loop: one detached task per connection.
///
/// Each task gets its own clone of the static-files config, so no state is
/// shared between concurrent connections.
pub async fn serve(
    listener: TcpListener,
    static_files: StaticFilesConfig,
    limits: LimitsConfig,
) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let static_files = static_files.clone();
        let limits = limits.clone();
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, static_files, limits);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
