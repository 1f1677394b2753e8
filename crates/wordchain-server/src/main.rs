use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
use wordchain_application::GameUseCase;
use wordchain_infrastructure::{ConfigService, TomlWordPairRepository};
use wordchain_server::{
    AppState, ROUTE_HEALTH, ROUTE_NEW_GAME, ROUTE_VALIDATE, build_router, telemetry,
};

#[derive(Parser)]
#[command(name = "wordchain-server")]
#[command(about = "Word Chain game server", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (defaults to ~/.config/wordchain/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

async fn wait_for_shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("[Server] Failed to listen for Ctrl-C: {}", e);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = ConfigService::load(cli.config.as_deref())?;
    telemetry::init_tracing(&config.logging)?;

    let word_pairs_path = ConfigService::word_pairs_path(&config)?;
    info!("[Server] Word pairs: {}", word_pairs_path.display());
    let repository = Arc::new(TomlWordPairRepository::new(word_pairs_path));

    let game = GameUseCase::from_config(repository, &config.game);
    if let Err(e) = game.check_available().await {
        error!("[Server] Data source check failed: {}", e);
        return Err(e).context("word pair store is not available");
    }
    info!(
        "[Server] Game config: max_attempts={}, graph_cache_ttl_secs={}",
        config.game.max_attempts, config.game.graph_cache_ttl_secs
    );

    let bind_addr = config.server.bind_address();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    let app = build_router(AppState::new(game, config.server.clone()));

    info!("[Server] Listening on http://{}", bind_addr);
    info!("[Server] Endpoints:");
    info!("  - GET  {}", ROUTE_NEW_GAME);
    info!("  - POST {}", ROUTE_VALIDATE);
    info!("  - GET  {}", ROUTE_HEALTH);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            wait_for_shutdown_signal().await;
            info!("[Server] Shutting down");
        })
        .await
        .context("server error")?;

    info!("[Server] Stopped");
    Ok(())
}
