use std::sync::Arc;

use analyzer::{GeminiClient, HttpTextAnalyzer, PhraseLexicon};
use anyhow::Context;
use storage::{Database, PgStore};
use web::{AppState, config::Config, routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting cyberbullying quiz API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url, config.database_max_connections)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let lexicon = match &config.toxic_words_path {
        Some(path) => PhraseLexicon::load(path)
            .with_context(|| format!("Failed to load lexicon from {}", path.display()))?,
        None => {
            tracing::warn!("TOXIC_WORDS_PATH not set, custom phrase detection disabled");
            PhraseLexicon::empty()
        }
    };
    tracing::info!("Loaded {} custom toxic phrases", lexicon.len());

    let gemini = match &config.gemini_api_key {
        Some(key) => Some(
            GeminiClient::new(key.clone(), config.gemini_model.clone())
                .context("Failed to create Gemini client")?,
        ),
        None => {
            tracing::info!("GEMINI_API_KEY not set, rewrites use the local model only");
            None
        }
    };
    let analyzer = HttpTextAnalyzer::new(&config.analyzer_url, gemini)
        .context("Failed to create inference client")?;
    tracing::info!("Using inference service at {}", config.analyzer_url);

    let state = AppState::new(
        Arc::new(PgStore::new(db.clone())),
        Arc::new(analyzer),
        Arc::new(lexicon),
    );

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);

    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    axum::serve(listener, routes::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutting down, closing database pool");
    db.close().await;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
