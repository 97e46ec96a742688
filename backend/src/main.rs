//! Lead Registration Server - entry point

use leads::{connect_store, create_app, init_tracing, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before reading RUST_LOG or configuration
    dotenvy::dotenv().ok();

    init_tracing("leads=debug,leads_server=debug,tower_http=debug,sqlx=warn");

    let config = Config::load()?;

    tracing::info!("Starting Lead Registration Server");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("Storage backend: {:?}", config.storage.backend);

    let store = connect_store(&config).await?;

    let addr = config.server.address();
    let app = create_app(AppState::new(store, config));

    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
