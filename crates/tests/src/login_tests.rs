use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{self, TEST_EMAIL, TEST_PASSWORD};

#[tokio::test]
async fn correct_password_signs_in_and_sets_cookie() {
    let app = common::test_app();
    let res = common::post_json(
        &app,
        "/session/login",
        json!({ "email": TEST_EMAIL, "password": TEST_PASSWORD }),
    )
    .await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["company_username"], "tester");
    let cookies = res.set_cookies();
    assert_eq!(cookies.len(), 1);
    assert!(cookies[0].starts_with("iw_session="));
    assert!(cookies[0].contains("HttpOnly"));
}

#[tokio::test]
async fn issued_cookie_resolves_the_signed_in_role() {
    let app = common::test_app();
    let res = common::post_json(
        &app,
        "/session/login",
        json!({ "email": " Tester@Example.com ", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(res.status, StatusCode::OK);

    let set_cookie = res.set_cookies().remove(0);
    let cookie = set_cookie.split(';').next().unwrap().to_string();
    let me = common::get_with(&app, "/session", &[("cookie", &cookie)]).await;

    assert_eq!(me.body["authenticated"], true);
    assert_eq!(me.body["role"], "STAFF");
}

#[tokio::test]
async fn wrong_password_is_unauthorized_without_cookie() {
    let app = common::test_app();
    let res = common::post_json(
        &app,
        "/session/login",
        json!({ "email": TEST_EMAIL, "password": "not-it" }),
    )
    .await;

    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(res.body["kind"], "Unauthorized");
    assert!(res.set_cookies().is_empty());
}

#[tokio::test]
async fn unknown_email_is_unauthorized() {
    let app = common::test_app();
    let res = common::post_json(
        &app,
        "/session/login",
        json!({ "email": "ghost@example.com", "password": TEST_PASSWORD }),
    )
    .await;

    assert_eq!(res.body["kind"], "Unauthorized");
    assert!(res.set_cookies().is_empty());
}

#[tokio::test]
async fn malformed_input_reports_fields() {
    let app = common::test_app();
    let res = common::post_json(
        &app,
        "/session/login",
        json!({ "email": "nope", "password": "" }),
    )
    .await;

    assert_eq!(res.body["kind"], "ValidationError");
    assert!(res.body["field_errors"]["email"].is_string());
    assert!(res.body["field_errors"]["password"].is_string());
}
