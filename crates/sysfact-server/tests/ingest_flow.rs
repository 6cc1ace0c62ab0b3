mod common;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use common::{build_test_context, expected_base, sample_body, submit_csv};
use std::fs;
use tower::util::ServiceExt;

#[tokio::test]
async fn valid_submission_persists_pair() {
    let ctx = build_test_context().unwrap();
    let body = sample_body();

    let (status, _, trace_id) = submit_csv(&ctx.app, "10.0.0.5:443", &body).await;
    assert_eq!(status, StatusCode::OK);
    assert!(trace_id.is_some());

    let base = expected_base("10.0.0.5:443");
    let csv_path = ctx.temp_dir.path().join(format!("{base}.csv"));
    let json_path = ctx.temp_dir.path().join(format!("{base}.json"));

    // CSV is the verbatim request body, not a re-serialization.
    assert_eq!(fs::read(&csv_path).unwrap(), body);

    let json: serde_json::Value =
        serde_json::from_slice(&fs::read(&json_path).unwrap()).unwrap();
    assert_eq!(json["processor"], "x86_64");
    assert_eq!(json["running_processes"], "init,bash,sshd");
    assert_eq!(json["users"], "alice bob");
    assert_eq!(json["os_name"], "linux");
    assert_eq!(json["os_version"], "5.15.0");
}

#[tokio::test]
async fn four_rows_rejected_without_files() {
    let ctx = build_test_context().unwrap();
    let body = b"Processor,x86_64\nRunning Processes,init\nUsers,alice\nOS Name,linux\n";

    let (status, text, _) = submit_csv(&ctx.app, "10.0.0.5:443", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(text.contains("bad request"));

    let entries: Vec<_> = fs::read_dir(ctx.temp_dir.path()).unwrap().collect();
    assert!(entries.is_empty(), "no files should be written: {entries:?}");
}

#[tokio::test]
async fn short_row_rejected_without_files() {
    let ctx = build_test_context().unwrap();
    let body = b"Processor,x86_64\nRunning Processes\nUsers,alice\nOS Name,linux\nOS Version,5.15.0\n";

    let (status, _, _) = submit_csv(&ctx.app, "10.0.0.5:443", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(fs::read_dir(ctx.temp_dir.path()).unwrap().next().is_none());
}

#[tokio::test]
async fn resubmission_overwrites_pair() {
    let ctx = build_test_context().unwrap();

    let (status, _, _) = submit_csv(&ctx.app, "10.0.0.5:443", &sample_body()).await;
    assert_eq!(status, StatusCode::OK);

    let second = b"Processor,arm64\nRunning Processes,init\nUsers,carol\nOS Name,linux\nOS Version,6.1.0\n";
    let (status, _, _) = submit_csv(&ctx.app, "10.0.0.5:443", second).await;
    assert_eq!(status, StatusCode::OK);

    let base = expected_base("10.0.0.5:443");
    assert_eq!(
        fs::read(ctx.temp_dir.path().join(format!("{base}.csv"))).unwrap(),
        second
    );
    let json: serde_json::Value = serde_json::from_slice(
        &fs::read(ctx.temp_dir.path().join(format!("{base}.json"))).unwrap(),
    )
    .unwrap();
    assert_eq!(json["processor"], "arm64");
    assert_eq!(json["users"], "carol");

    // Exactly one pair on disk.
    assert_eq!(fs::read_dir(ctx.temp_dir.path()).unwrap().count(), 2);
}

#[tokio::test]
async fn quoted_values_survive_end_to_end() {
    let ctx = build_test_context().unwrap();
    let record = sysfact_common::types::SystemFactRecord::from_values([
        "x86_64".into(),
        "a,b\nc".into(),
        "user \"one\"".into(),
        "linux".into(),
        "5.15.0".into(),
    ]);
    let body = sysfact_common::wire::encode_record(&record).unwrap();

    let (status, _, _) = submit_csv(&ctx.app, "10.0.0.7:9000", &body).await;
    assert_eq!(status, StatusCode::OK);

    let base = expected_base("10.0.0.7:9000");
    let json: serde_json::Value = serde_json::from_slice(
        &fs::read(ctx.temp_dir.path().join(format!("{base}.json"))).unwrap(),
    )
    .unwrap();
    assert_eq!(json["running_processes"], "a,b\nc");
    assert_eq!(json["users"], "user \"one\"");
}

#[tokio::test]
async fn json_write_failure_returns_500_and_keeps_csv() {
    let ctx = build_test_context().unwrap();
    let base = expected_base("10.0.0.9:1234");

    // Occupy the JSON path with a directory so the second write fails.
    fs::create_dir(ctx.temp_dir.path().join(format!("{base}.json"))).unwrap();

    let (status, _, _) = submit_csv(&ctx.app, "10.0.0.9:1234", &sample_body()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let csv_path = ctx.temp_dir.path().join(format!("{base}.csv"));
    assert_eq!(fs::read(csv_path).unwrap(), sample_body());
}

#[tokio::test]
async fn healthz_reports_liveness() {
    let ctx = build_test_context().unwrap();

    let req = Request::builder()
        .method("GET")
        .uri("/healthz")
        .body(Body::empty())
        .unwrap();
    let resp = ctx.app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["uptime_secs"].as_i64().unwrap() >= 0);
}
