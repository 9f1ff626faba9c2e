use fileserve::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let mut cfg = Config::load()?;

    // Optional positional argument overrides the serving root.
    if let Some(root) = std::env::args().nth(1) {
        cfg.static_files.root = root.into();
    }

    tokio::select! {
        res = fileserve::server::listener::run(&cfg) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
