use anyhow::Result;
use chrono::Utc;
use std::net::SocketAddr;
use std::sync::Arc;
use sysfact_server::app;
use sysfact_server::config::ServerConfig;
use sysfact_server::state::AppState;
use sysfact_storage::ArtifactStore;
use tokio::signal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("sysfact=info".parse()?))
        .init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/server.toml".to_string());
    let config = ServerConfig::load(&config_path)?;

    tracing::info!(
        port = config.port,
        data_dir = %config.data_dir,
        "sysfact-server starting"
    );

    let store = Arc::new(ArtifactStore::new(&config.data_dir)?);
    let state = AppState {
        store,
        start_time: Utc::now(),
        config: Arc::new(config.clone()),
    };

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let app = app::build_http_app(state);

    tracing::info!(http = %addr, "Server started");
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async {
        signal::ctrl_c().await.ok();
        tracing::info!("Shutting down gracefully");
    })
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}
