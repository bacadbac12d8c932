use emberd::config::{AcceptorKind, Config};
use emberd::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;

    tokio::select! {
        res = serve(&cfg) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}

async fn serve(cfg: &Config) -> anyhow::Result<()> {
    match cfg.server.acceptor {
        AcceptorKind::Spawn => server::listener::run(cfg).await,
        AcceptorKind::Poll => server::poller::run(cfg).await,
    }
}
