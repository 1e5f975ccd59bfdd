use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};

use studymate::{
    config::Config, create_router, llm::LLM, translate::GoogleTranslateAdapter,
    utils::init_logger, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing
    let _log_guard = init_logger(&config.logging);
    info!("Configuration loaded: {:?}", config.server);

    if config.llm.api_key.is_empty() {
        warn!(provider = %config.llm.provider, "No API key configured for the LLM provider");
    }
    if config.translation.api_key.is_empty() {
        warn!("No API key configured for translation");
    }

    tokio::fs::create_dir_all(&config.upload.dir)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create upload dir {}: {}", config.upload.dir.display(), e))?;

    let llm = LLM::new(&config.llm)?;
    let translator = Arc::new(GoogleTranslateAdapter::new(&config.translation)?);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    // Create shared state
    let state = AppState::new(config, llm, translator);

    // Create router
    let app = create_router(state);

    // Start server
    info!("StudyMate listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
