use crate::logging::TraceId;
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::{ConnectInfo, Extension, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use std::net::SocketAddr;
use sysfact_common::wire;
use sysfact_storage::error::StorageError;

#[derive(Serialize)]
struct HealthResponse {
    version: String,
    uptime_secs: i64,
    storage_root: String,
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let uptime = (Utc::now() - state.start_time).num_seconds();
    Json(HealthResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: uptime,
        storage_root: state.store.root().display().to_string(),
    })
}

/// Receives one CSV fact submission and persists its artifact pair.
///
/// The caller identifier is the peer socket address, which also becomes part
/// of the artifact base name. A malformed payload is rejected before anything
/// touches disk; a persistence failure after the CSV write leaves the partial
/// pair in place and reports 500.
async fn ingest(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Extension(trace_id): Extension<TraceId>,
    body: Bytes,
) -> Response {
    let record = match wire::decode_record(&body) {
        Ok(record) => record,
        Err(e) => {
            tracing::warn!(trace_id = %trace_id, caller = %addr, error = %e, "Rejected malformed submission");
            return (StatusCode::BAD_REQUEST, format!("bad request: {e}\n")).into_response();
        }
    };

    let caller = addr.to_string();
    let date = Utc::now().date_naive();
    match state.store.write_pair(&caller, date, &body, &record) {
        Ok(paths) => {
            tracing::info!(
                trace_id = %trace_id,
                caller = %caller,
                csv = %paths.csv.display(),
                json = %paths.json.display(),
                "System info saved"
            );
            (StatusCode::OK, "ok\n").into_response()
        }
        Err(e @ StorageError::InvalidCallerId { .. }) => {
            tracing::warn!(trace_id = %trace_id, caller = %caller, error = %e, "Rejected caller identifier");
            (
                StatusCode::BAD_REQUEST,
                "bad request: invalid caller identifier\n",
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(trace_id = %trace_id, caller = %caller, error = %e, "Failed to persist submission");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error\n").into_response()
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/system-info", post(ingest))
        .route("/healthz", get(health))
}
