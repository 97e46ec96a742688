//! Lead Registration Server
//!
//! Captures prospective customer registrations for delivery, pick-up and
//! payment services and serves them back through a query API.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod services;
pub mod store;

pub use crate::config::Config;

use crate::config::StorageBackend;
use crate::services::LeadService;
use crate::store::{InMemoryLeadStore, LeadStore, PgLeadStore};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub leads: LeadService,
    pub store: Arc<dyn LeadStore>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: Arc<dyn LeadStore>, config: Config) -> Self {
        Self {
            leads: LeadService::new(store.clone()),
            store,
            config: Arc::new(config),
        }
    }
}

/// Initialize tracing.
///
/// `RUST_LOG` takes precedence over `default_filter`; setting
/// `LEADS_LOG_FORMAT=json` switches to JSON output.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let json = std::env::var("LEADS_LOG_FORMAT").is_ok_and(|format| format == "json");

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Open the configured lead store, running migrations where enabled
pub async fn connect_store(config: &Config) -> anyhow::Result<Arc<dyn LeadStore>> {
    match config.storage.backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory lead store; leads are lost on restart");
            Ok(Arc::new(InMemoryLeadStore::new()))
        }
        StorageBackend::Postgres => {
            let url = config.database.url.as_deref().ok_or_else(|| {
                anyhow::anyhow!("database.url (LEADS__DATABASE__URL) is required for postgres storage")
            })?;

            tracing::info!("Connecting to database...");
            let store = PgLeadStore::connect(url, &config.database).await?;
            tracing::info!("Database connection established");

            if config.should_run_migrations() {
                tracing::info!("Running database migrations...");
                store.migrate().await?;
                tracing::info!("Migrations completed");
            }

            Ok(Arc::new(store))
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors),
        )
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Lead Registration API v1.0"
}
