use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use chatserv::completion::OpenAiClient;
use chatserv::config::ServerConfig;
use chatserv::routes::configure_routes;
use chatserv::state::AppState;
use chatserv::store::StoreHandle;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Loads .env first so RUST_LOG from it applies
    let config = ServerConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    // A failed connection leaves the server running in degraded mode
    let store = StoreHandle::connect(config.store.as_ref()).await;
    if !store.is_connected() {
        tracing::warn!("Message routes will answer 503 until the server is restarted with a reachable database");
    }

    let completion = OpenAiClient::new(config.completion.clone())?;
    if !completion.has_api_key() {
        tracing::warn!("OPENAI_API_KEY is not set, /api/chat requests will fail");
    }

    let state = AppState::new(store, Arc::new(completion));
    let routes = configure_routes(state, config.static_dir.clone());

    let addr = config.listen_addr();
    tracing::info!("Starting server on http://{}", addr);
    warp::serve(routes).run(addr).await;

    Ok(())
}
