use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use server::auth::jwt::{self, SessionClaims};

use crate::common;

#[tokio::test]
async fn anonymous_request_passes_through() {
    let app = common::test_app();
    let res = common::get_with(&app, "/session", &[]).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["authenticated"], false);
    assert!(res.set_cookies().is_empty());
}

#[tokio::test]
async fn session_cookie_is_resolved() {
    let app = common::test_app();
    let cookie = format!("iw_session={}", common::token_for(Some("DEPARTMENT_HEAD")));
    let res = common::get_with(&app, "/session", &[("cookie", &cookie)]).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["authenticated"], true);
    assert_eq!(res.body["role"], "DEPARTMENT_HEAD");
    assert_eq!(res.body["user"], 11);
}

#[tokio::test]
async fn bearer_header_is_accepted() {
    let app = common::test_app();
    let auth = format!("Bearer {}", common::token_for(Some("staff")));
    let res = common::get_with(&app, "/session", &[("authorization", &auth)]).await;

    assert_eq!(res.body["authenticated"], true);
    assert_eq!(res.body["role"], "STAFF");
}

#[tokio::test]
async fn session_without_role_shows_placeholder() {
    let app = common::test_app();
    let cookie = format!("iw_session={}", common::token_for(None));
    let res = common::get_with(&app, "/session", &[("cookie", &cookie)]).await;

    assert_eq!(res.body["authenticated"], true);
    assert_eq!(res.body["role"], "—");
}

#[tokio::test]
async fn invalid_token_is_not_rejected_but_cleared() {
    let app = common::test_app();
    let res = common::get_with(&app, "/session", &[("cookie", "iw_session=not.a.jwt")]).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["authenticated"], false);
    let cookies = res.set_cookies();
    assert_eq!(cookies.len(), 1);
    assert!(cookies[0].starts_with("iw_session="));
    assert!(cookies[0].contains("Max-Age=0"));
}

#[tokio::test]
async fn expired_token_is_treated_as_anonymous() {
    let app = common::test_app();
    // Sign once so the shared secret is installed.
    common::token_for(None);

    let mut claims = SessionClaims::for_principal(&common::principal(Some("C_SUITE")), 60);
    let now = chrono::Utc::now();
    claims.iat = (now - chrono::Duration::hours(3)).timestamp();
    claims.exp = (now - chrono::Duration::hours(2)).timestamp();
    let token = jwt::encode_claims(&claims).unwrap();

    let cookie = format!("iw_session={token}");
    let res = common::get_with(&app, "/session", &[("cookie", &cookie)]).await;
    assert_eq!(res.body["authenticated"], false);
}

#[tokio::test]
async fn scheduled_sign_in_sets_session_cookie() {
    let app = common::test_app();
    let res = common::post_with(&app, "/session/issue?role=C_SUITE", &[]).await;

    assert_eq!(res.status, StatusCode::NO_CONTENT);
    let cookies = res.set_cookies();
    assert_eq!(cookies.len(), 1);
    let cookie = &cookies[0];
    assert!(cookie.starts_with("iw_session="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));

    let token = cookie
        .trim_start_matches("iw_session=")
        .split(';')
        .next()
        .unwrap();
    let claims = jwt::validate_session_token(token).unwrap();
    assert_eq!(claims.role.as_deref(), Some("C_SUITE"));
}

#[tokio::test]
async fn issued_cookie_authenticates_next_request() {
    let app = common::test_app();
    let res = common::post_with(&app, "/session/issue?role=STAFF", &[]).await;
    let set_cookie = res.set_cookies().remove(0);
    let pair = set_cookie.split(';').next().unwrap().to_string();

    let res = common::get_with(&app, "/session", &[("cookie", &pair)]).await;
    assert_eq!(res.body["authenticated"], true);
    assert_eq!(res.body["role"], "STAFF");
}

#[tokio::test]
async fn scheduled_sign_out_clears_cookie() {
    let app = common::test_app();
    let cookie = format!("iw_session={}", common::token_for(Some("STAFF")));
    let res = common::post_with(&app, "/session/revoke", &[("cookie", &cookie)]).await;

    assert_eq!(res.status, StatusCode::NO_CONTENT);
    let cookies = res.set_cookies();
    assert_eq!(cookies.len(), 1);
    assert!(cookies[0].contains("Max-Age=0"));
}
