mod config;
mod error;
mod handlers;
mod models;
mod router;
mod state;

use config::GatewayConfig;
use matching_engine::MatchingEngine;
use router::create_router;
use state::AppState;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt::init();

    let config = GatewayConfig::from_env();
    tracing::info!("Starting matching gateway");

    let engine = MatchingEngine::new(config.engine.clone());
    let state = AppState::new(engine);
    let app = create_router(state);

    let listener = TcpListener::bind(config.listen_addr).await?;
    tracing::info!("Listening on {}", config.listen_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
