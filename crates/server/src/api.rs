use dioxus::prelude::*;
use shared_types::{FeatureFlags, Principal};

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

/// Session claims for the current request: middleware-validated claims
/// first, otherwise the token parsed straight from the headers.
#[cfg(feature = "server")]
fn current_claims() -> Option<crate::auth::jwt::SessionClaims> {
    use crate::auth::{cookies, jwt};

    let ctx = dioxus::fullstack::FullstackContext::current()?;
    let parts = ctx.parts_mut();

    if let Some(claims) = parts.extensions.get::<jwt::SessionClaims>() {
        return Some(claims.clone());
    }

    let token = cookies::extract_session_token(&parts.headers)?;
    jwt::validate_session_token(&token).ok()
}

/// Feature flags loaded from `config.toml`.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_feature_flags() -> Result<FeatureFlags, ServerFnError> {
    Ok(crate::config::feature_flags().clone())
}

/// The signed-in principal, or `None` when there is no valid session.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_current_principal() -> Result<Option<Principal>, ServerFnError> {
    let principal = current_claims().map(|c| c.to_principal());
    tracing::debug!(authenticated = principal.is_some(), "session resolved");
    Ok(principal)
}

/// Sign in against the account directory. Sets the HTTP-only session
/// cookie on success.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn login(email: String, password: String) -> Result<Principal, ServerFnError> {
    use crate::auth::{access, cookies};

    let (principal, token) = access::issue_session(crate::config::directory(), &email, &password)
        .map_err(|e| e.into_server_fn_error())?;

    cookies::schedule_session_cookie(&token);
    tracing::info!(
        account = principal.id,
        role = %principal.role_label(),
        "signed in"
    );

    Ok(principal)
}

/// Sign out by clearing the session cookie.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    if let Some(claims) = current_claims() {
        tracing::info!(account = claims.sub, "signed out");
    }
    crate::auth::cookies::schedule_clear_cookie();
    Ok(())
}

/// Everyone in the account directory. Managers only.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_directory() -> Result<Vec<Principal>, ServerFnError> {
    use crate::auth::access;
    use shared_types::MANAGER_ROLES;

    let claims = current_claims();
    access::require_any_role(claims.as_ref(), MANAGER_ROLES)
        .map_err(|e| e.into_server_fn_error())?;

    Ok(access::directory_listing(crate::config::directory()))
}

/// A single directory member by company username. Managers only.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_directory_member(company_username: String) -> Result<Principal, ServerFnError> {
    use crate::auth::access;
    use shared_types::{AppError, MANAGER_ROLES};

    let claims = current_claims();
    access::require_any_role(claims.as_ref(), MANAGER_ROLES)
        .map_err(|e| e.into_server_fn_error())?;

    access::directory_member(crate::config::directory(), &company_username)
        .ok_or_else(|| AppError::not_found("User not found").into_server_fn_error())
}
