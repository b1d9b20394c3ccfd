use axum::http::header::InvalidHeaderValue;
use axum::http::{header, HeaderMap, HeaderValue};
use cookie::Cookie;
use std::sync::{Arc, Mutex};

use super::jwt;

pub const SESSION_COOKIE: &str = "iw_session";

fn cookie_secure() -> bool {
    std::env::var("COOKIE_SECURE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false)
}

fn cookie_domain() -> Option<String> {
    std::env::var("COOKIE_DOMAIN")
        .ok()
        .filter(|d| !d.is_empty())
}

fn build(value: &str, max_age: cookie::time::Duration) -> Result<HeaderValue, InvalidHeaderValue> {
    let mut cookie = Cookie::build((SESSION_COOKIE, value))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(max_age)
        .secure(cookie_secure());

    if let Some(domain) = cookie_domain() {
        cookie = cookie.domain(domain);
    }

    HeaderValue::from_str(&cookie.build().to_string())
}

/// Set-Cookie value carrying the session token.
pub fn build_session_cookie(
    token: &str,
    max_age_minutes: i64,
) -> Result<HeaderValue, InvalidHeaderValue> {
    build(token, cookie::time::Duration::minutes(max_age_minutes))
}

/// Set-Cookie value that expires the session cookie.
pub fn build_clear_cookie() -> Result<HeaderValue, InvalidHeaderValue> {
    build("", cookie::time::Duration::ZERO)
}

/// Session token from the cookie (preferred) or a Bearer header.
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = extract_cookie(headers, SESSION_COOKIE).filter(|t| !t.is_empty()) {
        return Some(token);
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|s| s.split(';'))
        .filter_map(|piece| Cookie::parse(piece.trim().to_string()).ok())
        .find(|c| c.name() == name)
        .map(|c| c.value().to_string())
}

pub fn set_session_cookie(headers: &mut HeaderMap, token: &str) {
    match build_session_cookie(token, jwt::session_ttl_minutes()) {
        Ok(value) => {
            headers.append(header::SET_COOKIE, value);
        }
        Err(e) => tracing::error!(error = %e, "session cookie rejected"),
    }
}

pub fn clear_session_cookie(headers: &mut HeaderMap) {
    match build_clear_cookie() {
        Ok(value) => {
            headers.append(header::SET_COOKIE, value);
        }
        Err(e) => tracing::error!(error = %e, "clear cookie rejected"),
    }
}

/// Cookie change requested by a server function for the current response.
#[derive(Clone, Debug, PartialEq)]
pub enum PendingCookieAction {
    Set(String),
    Clear,
}

/// Shared slot, inserted into request extensions by the session
/// middleware, through which server functions schedule cookie changes.
#[derive(Clone, Debug, Default)]
pub struct CookieSlot(pub Arc<Mutex<Option<PendingCookieAction>>>);

impl CookieSlot {
    pub fn schedule(&self, action: PendingCookieAction) {
        if let Ok(mut slot) = self.0.lock() {
            *slot = Some(action);
        }
    }

    pub fn take(&self) -> Option<PendingCookieAction> {
        self.0.lock().ok().and_then(|mut slot| slot.take())
    }
}

fn schedule(action: PendingCookieAction) {
    if let Some(ctx) = dioxus::fullstack::FullstackContext::current() {
        let parts = ctx.parts_mut();
        match parts.extensions.get::<CookieSlot>() {
            Some(slot) => slot.schedule(action),
            None => tracing::warn!("no cookie slot on request, session middleware missing"),
        }
    }
}

/// Ask the middleware to set the session cookie on this response.
pub fn schedule_session_cookie(token: &str) {
    schedule(PendingCookieAction::Set(token.to_string()));
}

/// Ask the middleware to expire the session cookie on this response.
pub fn schedule_clear_cookie() {
    schedule(PendingCookieAction::Clear);
}
