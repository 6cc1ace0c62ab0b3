#![allow(dead_code)]

use anyhow::Result;
use axum::body::{to_bytes, Body};
use axum::extract::ConnectInfo;
use axum::http::{Request, StatusCode};
use chrono::Utc;
use std::net::SocketAddr;
use std::sync::Arc;
use sysfact_server::app;
use sysfact_server::config::ServerConfig;
use sysfact_server::state::AppState;
use sysfact_storage::ArtifactStore;
use tempfile::TempDir;
use tower::util::ServiceExt;

pub struct TestContext {
    pub temp_dir: TempDir,
    pub state: AppState,
    pub app: axum::Router,
}

pub fn build_test_context() -> Result<TestContext> {
    let temp_dir = tempfile::tempdir()?;
    let store = Arc::new(ArtifactStore::new(temp_dir.path())?);

    let config = ServerConfig {
        port: 8080,
        data_dir: temp_dir.path().to_string_lossy().to_string(),
    };

    let state = AppState {
        store,
        start_time: Utc::now(),
        config: Arc::new(config),
    };

    let app = app::build_http_app(state.clone());

    Ok(TestContext {
        temp_dir,
        state,
        app,
    })
}

/// POSTs a CSV body to `/system-info` as if it came from `peer`.
pub async fn submit_csv(
    app: &axum::Router,
    peer: &str,
    body: &[u8],
) -> (StatusCode, String, Option<String>) {
    let addr: SocketAddr = peer.parse().expect("peer address should parse");
    let mut req = Request::builder()
        .method("POST")
        .uri("/system-info")
        .header("Content-Type", "text/csv")
        .body(Body::from(body.to_vec()))
        .expect("request should build");
    req.extensions_mut().insert(ConnectInfo(addr));

    let resp = app
        .clone()
        .oneshot(req)
        .await
        .expect("request should be handled");

    let status = resp.status();
    let trace_id = resp
        .headers()
        .get("x-trace-id")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should read");
    (status, String::from_utf8_lossy(&bytes).to_string(), trace_id)
}

/// A well-formed five-row submission body.
pub fn sample_body() -> Vec<u8> {
    b"Processor,x86_64\nRunning Processes,\"init,bash,sshd\"\nUsers,alice bob\nOS Name,linux\nOS Version,5.15.0\n".to_vec()
}

/// Base name the server will use for `peer` submissions received today.
pub fn expected_base(peer: &str) -> String {
    format!("{peer}_{}", Utc::now().date_naive().format("%Y-%m-%d"))
}
