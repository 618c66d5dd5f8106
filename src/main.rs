use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use pod_echo::app_state::build_app_state;
use pod_echo::config::AppConfig;
use pod_echo::logging::init_logging;
use pod_echo::{debug, server};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let config = AppConfig::parse();
    let _guard = init_logging();

    info!(
        port = config.port,
        pod_name = %config.pod_name,
        pod_ip = %config.pod_ip,
        "Starting pod-echo v{}",
        env!("CARGO_PKG_VERSION")
    );

    let addr = config.listen_addr();
    let once = config.once;
    let state = build_app_state(config);

    if once {
        return debug::run_once(&state).await;
    }

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    server::serve(listener, state, server::shutdown_signal()).await?;

    info!("Server stopped");
    Ok(())
}
