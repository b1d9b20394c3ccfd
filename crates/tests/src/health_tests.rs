use axum::http::StatusCode;

use crate::common;

#[tokio::test]
async fn health_reports_ok_and_version() {
    let app = common::test_app();
    let res = common::get_with(&app, "/health", &[]).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["status"], "ok");
    assert_eq!(res.body["version"], env!("CARGO_PKG_VERSION"));
    assert!(res.body["uptime_seconds"].is_u64());
}

#[tokio::test]
async fn health_reports_sign_in_readiness() {
    let app = common::test_app();
    let res = common::get_with(&app, "/health", &[]).await;

    assert_eq!(res.body["sign_in"]["session_secret"], true);
    assert_eq!(res.body["sign_in"]["directory_accounts"], 1);
}

#[tokio::test]
async fn health_ignores_invalid_session() {
    let app = common::test_app();
    let res = common::get_with(&app, "/health", &[("cookie", "iw_session=garbage")]).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["status"], "ok");
}
