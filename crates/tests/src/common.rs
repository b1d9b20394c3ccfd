use axum::{
    body::Body,
    extract::{Query, Request},
    http::{header, HeaderMap, StatusCode},
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use server::auth::access;
use server::auth::cookies::{CookieSlot, PendingCookieAction};
use server::auth::jwt::{self, SessionClaims};
use shared_types::{AppConfig, DirectoryAccount, DirectoryConfig, Principal};
use std::collections::HashMap;
use std::sync::Once;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-session-secret";

/// Email and password of the one account in the test directory.
pub const TEST_EMAIL: &str = "tester@example.com";
pub const TEST_PASSWORD: &str = "password";

/// argon2 reference vector for "password", the same hash `config.toml` ships.
const TEST_PASSWORD_HASH: &str =
    "$argon2i$v=19$m=65536,t=2,p=4$c29tZXNhbHQ$RdescudvJCsgt3ub+b+dWRWJTmaaJObG";

static INIT: Once = Once::new();

fn init_env() {
    INIT.call_once(|| {
        std::env::set_var("SESSION_SECRET", TEST_SECRET);
        server::config::install_config(AppConfig {
            directory: DirectoryConfig {
                accounts: vec![DirectoryAccount {
                    id: 11,
                    email: TEST_EMAIL.to_string(),
                    company_username: "tester".to_string(),
                    display_name: "Terry Tester".to_string(),
                    password_hash: TEST_PASSWORD_HASH.to_string(),
                    role: Some("STAFF".to_string()),
                    department: Some("Claims Operations".to_string()),
                }],
            },
            ..AppConfig::default()
        });
        server::health::record_start_time();
    });
}

/// A principal holding `role` as its role key.
pub fn principal(role: Option<&str>) -> Principal {
    Principal {
        id: 11,
        company_username: "tester".to_string(),
        display_name: "Terry Tester".to_string(),
        email: "tester@example.com".to_string(),
        role_key: role.map(str::to_string),
        role: None,
        department: Some("Claims Operations".to_string()),
    }
}

/// A freshly signed session token for a principal with `role`.
pub fn token_for(role: Option<&str>) -> String {
    init_env();
    jwt::create_session_token(&principal(role)).expect("token should sign")
}

/// Echo what the middleware resolved for this request.
async fn whoami(req: Request) -> Json<Value> {
    let claims = req.extensions().get::<SessionClaims>();
    Json(json!({
        "authenticated": claims.is_some(),
        "role": claims.map(|c| c.to_principal().role_label()),
        "user": claims.map(|c| c.sub),
    }))
}

/// Schedule a session cookie the way a sign-in server function does.
async fn issue(Query(params): Query<HashMap<String, String>>, req: Request) -> StatusCode {
    let Some(slot) = req.extensions().get::<CookieSlot>() else {
        return StatusCode::INTERNAL_SERVER_ERROR;
    };
    match jwt::create_session_token(&principal(params.get("role").map(String::as_str))) {
        Ok(token) => {
            slot.schedule(PendingCookieAction::Set(token));
            StatusCode::NO_CONTENT
        }
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Sign in against the installed directory the way the `login` server
/// function does, answering with the principal or the `AppError`.
async fn sign_in(req: Request) -> (StatusCode, Json<Value>) {
    let Some(slot) = req.extensions().get::<CookieSlot>().cloned() else {
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(Value::Null));
    };
    let Ok(bytes) = axum::body::to_bytes(req.into_body(), usize::MAX).await else {
        return (StatusCode::BAD_REQUEST, Json(Value::Null));
    };
    let form: HashMap<String, String> = serde_json::from_slice(&bytes).unwrap_or_default();
    let email = form.get("email").map(String::as_str).unwrap_or_default();
    let password = form.get("password").map(String::as_str).unwrap_or_default();

    match access::issue_session(server::config::directory(), email, password) {
        Ok((principal, token)) => {
            slot.schedule(PendingCookieAction::Set(token));
            (StatusCode::OK, Json(json!(principal)))
        }
        Err(err) => (StatusCode::UNAUTHORIZED, Json(json!(err))),
    }
}

async fn revoke(req: Request) -> StatusCode {
    match req.extensions().get::<CookieSlot>() {
        Some(slot) => {
            slot.schedule(PendingCookieAction::Clear);
            StatusCode::NO_CONTENT
        }
        None => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Router wired like the app server: trace layer inside the session
/// middleware, health endpoint alongside.
pub fn test_app() -> Router {
    init_env();

    Router::new()
        .route("/health", get(server::health::health_check))
        .route("/session", get(whoami))
        .route("/session/issue", post(issue))
        .route("/session/revoke", post(revoke))
        .route("/session/login", post(sign_in))
        .layer(server::telemetry::http_trace_layer())
        .layer(middleware::from_fn(
            server::auth::middleware::session_middleware,
        ))
}

/// POST a JSON body.
pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response {
    let req = axum::http::Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, req).await
}

/// GET with optional extra headers.
pub async fn get_with(app: &Router, uri: &str, headers: &[(&str, &str)]) -> Response {
    let mut builder = axum::http::Request::builder().method("GET").uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    send(app, builder.body(Body::empty()).unwrap()).await
}

/// POST an empty body with optional extra headers.
pub async fn post_with(app: &Router, uri: &str, headers: &[(&str, &str)]) -> Response {
    let mut builder = axum::http::Request::builder().method("POST").uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    send(app, builder.body(Body::empty()).unwrap()).await
}

pub struct Response {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl Response {
    pub fn set_cookies(&self) -> Vec<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_string)
            .collect()
    }
}

async fn send(app: &Router, req: axum::http::Request<Body>) -> Response {
    let response = app
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let headers = response.headers().clone();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

    Response {
        status,
        headers,
        body,
    }
}
