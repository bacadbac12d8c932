use tokio::net::TcpListener;
use tracing::{debug, info};

use crate::config::Config;
use crate::http::connection::Connection;

/// Task-per-connection acceptor.
///
/// Blocks in accept; every accepted socket moves into a detached task that
/// runs the connection handler to completion. Handler errors are logged and
/// die with their task; an accept failure is fatal and takes the server
/// down, since nothing supervises a broken listener.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!("Listening on {}", cfg.server.listen_addr);

    loop {
        let (socket, peer) = listener.accept().await?;
        debug!("Accepted connection from {}", peer);

        let content = cfg.content.clone();
        tokio::spawn(async move {
            let conn = Connection::new(socket, content);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
