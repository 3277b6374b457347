//! Household inventory tracker - server binary

use household_inventory::{create_app, db, AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "household_inventory=debug,inventory_server=debug,tower_http=debug,sqlx=warn"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load()?;

    tracing::info!("Starting household inventory server");
    tracing::info!("Environment: {}", config.environment);

    let db_pool = db::init(&config.database).await?;
    tracing::info!("Database ready at {}", config.database.path);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(db_pool, config)?;
    let app = create_app(state);

    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutdown signal received");
}
