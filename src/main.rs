use sherlock_lead_api::config::Config;
use sherlock_lead_api::handlers::AppState;
use sherlock_lead_api::server::build_app;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the application.
///
/// Initializes logging, loads configuration from the environment, builds the
/// router (CORS, tracing, body limit, per-IP rate limiting) and starts the
/// Axum server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sherlock_lead_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded successfully");

    let port = config.port;
    let app_state = Arc::new(AppState::new(config));
    tracing::info!(
        "Agent registry initialized: {} capabilities",
        app_state.agents.capabilities().len()
    );

    let app = build_app(app_state, true)?;

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
