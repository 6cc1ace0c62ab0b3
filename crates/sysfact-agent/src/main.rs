use anyhow::Result;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use sysfact_agent::config::AgentConfig;
use sysfact_agent::submit::Submitter;
use tokio::signal;
use tracing_subscriber::EnvFilter;

#[derive(Clone)]
struct AgentState {
    submitter: Arc<Submitter>,
}

/// Runs one gather-and-submit cycle.
///
/// Failures abort the run and surface as 502 from this endpoint; they never
/// terminate the agent process.
async fn send_info(State(state): State<AgentState>) -> Response {
    // Fact gathering shells out and walks the process table; keep it off the
    // async runtime threads.
    let record = match tokio::task::spawn_blocking(sysfact_collector::gather_record).await {
        Ok(Ok(record)) => record,
        Ok(Err(e)) => {
            tracing::error!(error = %e, "Fact gathering failed");
            return (
                StatusCode::BAD_GATEWAY,
                format!("fact gathering failed: {e:#}\n"),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Fact gathering task failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "internal error\n").into_response();
        }
    };

    match state.submitter.submit(&record).await {
        Ok(()) => {
            tracing::info!("System information sent to collector");
            (StatusCode::OK, "submitted\n").into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Submission failed");
            (StatusCode::BAD_GATEWAY, format!("submission failed: {e:#}\n")).into_response()
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("sysfact=info".parse()?))
        .init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/agent.toml".to_string());
    let config = AgentConfig::load(&config_path)?;

    tracing::info!(
        port = config.port,
        api_url = %config.api_url,
        "sysfact-agent starting"
    );

    let state = AgentState {
        submitter: Arc::new(Submitter::new(&config.api_url)),
    };
    let app = Router::new()
        .route("/send-info", post(send_info))
        .with_state(state);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(http = %addr, "Agent listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            signal::ctrl_c().await.ok();
            tracing::info!("Shutting down gracefully");
        })
        .await?;

    Ok(())
}
