use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use projectdash::{build_router, AppState, ServerConfig, Store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "projectdash=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    info!("🚀 Starting projectdash in {} environment", config.environment);
    info!(
        submit_ms = config.latency.submit.as_millis() as u64,
        delete_ms = config.latency.delete.as_millis() as u64,
        config_ms = config.latency.config.as_millis() as u64,
        "Simulated latency"
    );

    // State is rebuilt from the sample dataset on every start
    let store = Store::seeded();
    let app_state = AppState::new(store, &config);
    let app = build_router(app_state, &config);

    // Start server
    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 Server starting on http://{}", addr);
    info!("📊 GraphQL Playground available at http://{}/playground", addr);
    info!("🏥 Health check available at http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
