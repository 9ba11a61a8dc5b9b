use std::path::Path;
use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use dnd_sheet::adapters::http::{app_router, CharacterHandlers, SpellHandlers};
use dnd_sheet::adapters::sqlite::{
    connect, migrate, SqliteCharacterRepository, SqliteSpellRepository,
};
use dnd_sheet::adapters::srd::{Dnd5eApiClient, Dnd5eApiConfig};
use dnd_sheet::config::{AppConfig, ConfigError, LogFormat, ServerConfig};
use dnd_sheet::domain::foundation::DomainError;

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // --- Configuration ---
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;

    // --- Tracing ---
    init_tracing(&config.server);
    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        environment = ?config.server.environment,
        "Loaded configuration"
    );

    // --- Database ---
    if let Some(parent) = config.database.file_path().as_deref().and_then(Path::parent) {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let pool = connect(&config.database).await?;
    tracing::info!(url = %config.database.url, "Database connection pool created");

    if config.database.run_migrations {
        migrate(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    // --- Adapters ---
    let characters = Arc::new(
        SqliteCharacterRepository::new(pool.clone())
            .with_slug_attempts(config.characters.slug_max_attempts),
    );
    let spells = Arc::new(SqliteSpellRepository::new(pool));
    let srd = Arc::new(Dnd5eApiClient::new(
        Dnd5eApiConfig::new(config.srd.base_url.clone())
            .with_timeout(config.srd.timeout())
            .with_concurrency(config.srd.concurrency),
    )?);

    // --- Router ---
    let app = app_router(
        CharacterHandlers::new(characters),
        SpellHandlers::new(spells, srd),
        &config.server,
    );

    // --- Start server ---
    let addr = config.server.socket_addr().map_err(ConfigError::from)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
