use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use super::cookies::{self, CookieSlot, PendingCookieAction};
use super::jwt::validate_session_token;

/// Permissive session middleware.
///
/// Validates the session token (cookie or Bearer header) and inserts the
/// `SessionClaims` into request extensions, then inserts a `CookieSlot`
/// so server functions can schedule cookie changes. After the handler
/// runs, the scheduled action is applied to the response.
///
/// Never rejects a request. A token that fails validation is cleared so
/// the browser stops sending it.
pub async fn session_middleware(mut req: Request, next: Next) -> Response {
    let mut stale_token = false;

    if let Some(token) = cookies::extract_session_token(req.headers()) {
        match validate_session_token(&token) {
            Ok(claims) => {
                req.extensions_mut().insert(claims);
            }
            Err(e) => {
                tracing::debug!(error = %e, "discarding invalid session token");
                stale_token = true;
            }
        }
    }

    let cookie_slot = CookieSlot::default();
    req.extensions_mut().insert(cookie_slot.clone());

    let mut response = next.run(req).await;

    match cookie_slot.take() {
        Some(PendingCookieAction::Set(token)) => {
            cookies::set_session_cookie(response.headers_mut(), &token);
        }
        Some(PendingCookieAction::Clear) => {
            cookies::clear_session_cookie(response.headers_mut());
        }
        None if stale_token => {
            cookies::clear_session_cookie(response.headers_mut());
        }
        None => {}
    }

    response
}
