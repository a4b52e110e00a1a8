use anyhow::{Context, Result};
use tracing::{info, warn};

use portfolio_api::{app, config, middleware};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = config::Config::load().context("Failed to load configuration")?;

    middleware::logging::init_logging(&config.logging)
        .context("Failed to initialize logging")?;
    middleware::init_metrics().context("Failed to install metrics recorder")?;

    info!("Starting Portfolio v{}", env!("CARGO_PKG_VERSION"));

    let db_config = config.database.pool_config();
    info!(path = %db_config.path.display(), "Opening database");
    let pool = persistence::db::create_pool(&db_config)
        .await
        .context("Failed to open database")?;

    // Schema and seed failures abort startup.
    let report = persistence::initialize(&pool)
        .await
        .context("Database initialization failed")?;
    info!(seeded_rows = report.seeded.total(), "Database ready");

    if config.email.credential().is_none() {
        warn!("No SMTP credential configured, contact notifications will only be logged");
    }

    let addr = config.socket_addr()?;
    let app = app::create_app(config, pool).context("Failed to configure email transport")?;

    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
