use application::CustomerApp;
use config::{Config, StorageBackend};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod error;
mod routes;

use routes::AppState;

const DEFAULT_LOG_FILTER: &str =
    "api_server=debug,application=info,infrastructure=info,tower_http=debug";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    info!("🚀 Starting Customer Credit API Server");

    // Load configuration from environment
    let config = Config::from_env()?;
    info!("💾 Storage backend: {}", config.storage_backend);

    let customer_app = match config.storage_backend {
        StorageBackend::Sqlite => {
            info!("💾 Using database: {}", config.database_path);
            if config.is_in_memory_database() {
                warn!("⚠️  In-memory SQLite database; data is lost on shutdown");
            }
            CustomerApp::new(&config.database_path, config.database_pool_size)?
        }
        StorageBackend::Memory => CustomerApp::in_memory(),
    };

    let app = routes::router(AppState {
        customer_app: Arc::new(customer_app),
    });

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("🌐 API Server listening on http://{}", bind_address);
    info!("📖 API Documentation:");
    info!("   POST   /customers             - Create customer");
    info!("   GET    /customers?sort=asc|desc - List customers by credit (default desc)");
    info!("   GET    /customers/:id         - Get customer");
    info!("   PUT    /customers/:id         - Update customer");
    info!("   DELETE /customers/:id         - Delete customer");
    info!("   POST   /customers/:id/credit  - Add credit");
    info!("   GET    /health                - Health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
    }
}
