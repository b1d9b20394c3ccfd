use axum::Json;
use serde::Serialize;
use std::sync::OnceLock;
use std::time::Instant;

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Record the application start time. Call once during startup.
pub fn record_start_time() {
    START_TIME.get_or_init(Instant::now);
}

/// What sign-in depends on.
#[derive(Debug, Serialize, PartialEq)]
pub struct SignInReadiness {
    pub session_secret: bool,
    pub directory_accounts: usize,
}

impl SignInReadiness {
    fn current() -> Self {
        Self {
            session_secret: std::env::var("SESSION_SECRET").is_ok_and(|s| !s.is_empty()),
            directory_accounts: crate::config::directory().accounts.len(),
        }
    }

    /// `ok` when a secret is configured and at least one account can sign in.
    pub fn status(&self) -> &'static str {
        if self.session_secret && self.directory_accounts > 0 {
            "ok"
        } else {
            "degraded"
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub uptime_seconds: u64,
    pub version: &'static str,
    pub sign_in: SignInReadiness,
}

/// `GET /health`. Always 200; `status` reports whether sign-in can work.
pub async fn health_check() -> Json<HealthResponse> {
    let uptime = START_TIME.get().map_or(0, |t| t.elapsed().as_secs());
    let sign_in = SignInReadiness::current();

    Json(HealthResponse {
        status: sign_in.status(),
        uptime_seconds: uptime,
        version: env!("CARGO_PKG_VERSION"),
        sign_in,
    })
}
