//! Server-side role checks for server functions.
//!
//! The dashboard hides routes by role, but only these checks stop a
//! caller from reading manager data.

use shared_types::{is_route_allowed, AppError, DirectoryConfig, LoginRequest, Principal, Role};

use super::jwt::{create_session_token, SessionClaims};
use super::password::verify_password;
use crate::error_convert::ValidateRequest;

const BAD_CREDENTIALS: &str = "Invalid email or password";

/// Check an email/password pair against the directory.
///
/// Bad input is a `ValidationError`. An unknown email and a wrong password
/// both give the same `Unauthorized`. A stored hash that cannot be parsed
/// is an `InternalError`.
pub fn authenticate(
    directory: &DirectoryConfig,
    email: &str,
    password: &str,
) -> Result<Principal, AppError> {
    let req = LoginRequest {
        email: email.trim().to_string(),
        password: password.to_string(),
    };
    req.validate_request()?;

    let account = directory
        .find_by_email(&req.email)
        .ok_or_else(|| AppError::unauthorized(BAD_CREDENTIALS))?;

    let valid = verify_password(&req.password, &account.password_hash).map_err(|e| {
        tracing::error!(account = account.id, error = %e, "stored password hash is malformed");
        AppError::internal("Sign-in is unavailable for this account")
    })?;

    if !valid {
        tracing::info!(account = account.id, "sign-in rejected");
        return Err(AppError::unauthorized(BAD_CREDENTIALS));
    }

    Ok(account.to_principal())
}

/// [`authenticate`], then mint a session token for the principal.
pub fn issue_session(
    directory: &DirectoryConfig,
    email: &str,
    password: &str,
) -> Result<(Principal, String), AppError> {
    let principal = authenticate(directory, email, password)?;
    let token = create_session_token(&principal).map_err(|e| AppError::internal(e.to_string()))?;
    Ok((principal, token))
}

/// The caller's claims, or `Unauthorized`.
pub fn require_session(claims: Option<&SessionClaims>) -> Result<&SessionClaims, AppError> {
    claims.ok_or_else(|| AppError::unauthorized("Authentication required"))
}

/// Require a session whose role is in `allow_roles`. An empty list only
/// requires a session.
pub fn require_any_role<'a>(
    claims: Option<&'a SessionClaims>,
    allow_roles: &[Role],
) -> Result<&'a SessionClaims, AppError> {
    let claims = require_session(claims)?;
    if is_route_allowed(claims.role.as_deref(), allow_roles) {
        Ok(claims)
    } else {
        Err(AppError::forbidden("You do not have access to this resource"))
    }
}

/// Directory accounts as principals, sorted by display name.
pub fn directory_listing(directory: &DirectoryConfig) -> Vec<Principal> {
    let mut people: Vec<Principal> = directory
        .accounts
        .iter()
        .map(|a| a.to_principal())
        .collect();
    people.sort_by(|a, b| a.display_name.cmp(&b.display_name));
    people
}

/// One directory account by company username (case-insensitive).
pub fn directory_member(directory: &DirectoryConfig, company_username: &str) -> Option<Principal> {
    let wanted = company_username.trim();
    directory
        .accounts
        .iter()
        .find(|a| a.company_username.eq_ignore_ascii_case(wanted))
        .map(|a| a.to_principal())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::hash_password;
    use shared_types::{AppErrorKind, DirectoryAccount, MANAGER_ROLES};

    fn claims(role: Option<&str>) -> SessionClaims {
        SessionClaims {
            sub: 1,
            email: "x@example.com".to_string(),
            company_username: "x".to_string(),
            display_name: "X".to_string(),
            role: role.map(str::to_string),
            department: None,
            iat: 0,
            exp: 0,
            jti: None,
        }
    }

    fn account(id: i64, username: &str, name: &str) -> DirectoryAccount {
        DirectoryAccount {
            id,
            email: format!("{username}@example.com"),
            company_username: username.to_string(),
            display_name: name.to_string(),
            password_hash: String::new(),
            role: Some("STAFF".to_string()),
            department: None,
        }
    }

    #[test]
    fn missing_session_is_unauthorized() {
        let err = require_any_role(None, MANAGER_ROLES).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::Unauthorized);
    }

    #[test]
    fn staff_is_forbidden_from_manager_data() {
        let c = claims(Some("STAFF"));
        let err = require_any_role(Some(&c), MANAGER_ROLES).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::Forbidden);
    }

    #[test]
    fn managers_pass() {
        for role in ["C_SUITE", "department_head"] {
            let c = claims(Some(role));
            assert!(require_any_role(Some(&c), MANAGER_ROLES).is_ok());
        }
    }

    #[test]
    fn empty_allow_list_only_needs_session() {
        let c = claims(None);
        assert!(require_any_role(Some(&c), &[]).is_ok());
    }

    #[test]
    fn listing_is_sorted_by_display_name() {
        let directory = DirectoryConfig {
            accounts: vec![account(1, "zoe", "Zoe Ward"), account(2, "amy", "Amy Lane")],
        };
        let names: Vec<_> = directory_listing(&directory)
            .into_iter()
            .map(|p| p.display_name)
            .collect();
        assert_eq!(names, vec!["Amy Lane", "Zoe Ward"]);
    }

    #[test]
    fn member_lookup_ignores_case() {
        let directory = DirectoryConfig {
            accounts: vec![account(1, "jdoe", "Jamie Doe")],
        };
        assert_eq!(directory_member(&directory, "JDoe").map(|p| p.id), Some(1));
        assert!(directory_member(&directory, "nobody").is_none());
    }

    fn sign_in_directory(password_hash: String) -> DirectoryConfig {
        DirectoryConfig {
            accounts: vec![DirectoryAccount {
                id: 5,
                email: "Dana.Lead@example.com".to_string(),
                company_username: "dana".to_string(),
                display_name: "Dana Lead".to_string(),
                password_hash,
                role: Some("DEPARTMENT_HEAD".to_string()),
                department: Some("Claims Operations".to_string()),
            }],
        }
    }

    #[test]
    fn authenticate_accepts_correct_password() {
        let directory = sign_in_directory(hash_password("claims-desk").unwrap());
        let principal = authenticate(&directory, "Dana.Lead@example.com", "claims-desk").unwrap();
        assert_eq!(principal.id, 5);
        assert_eq!(principal.role_label(), "DEPARTMENT_HEAD");
    }

    #[test]
    fn authenticate_ignores_email_case_and_whitespace() {
        let directory = sign_in_directory(hash_password("claims-desk").unwrap());
        let principal = authenticate(&directory, "  dana.lead@EXAMPLE.com ", "claims-desk").unwrap();
        assert_eq!(principal.company_username, "dana");
    }

    #[test]
    fn wrong_password_and_unknown_email_look_the_same() {
        let directory = sign_in_directory(hash_password("claims-desk").unwrap());
        let wrong = authenticate(&directory, "dana.lead@example.com", "nope").unwrap_err();
        let unknown = authenticate(&directory, "ghost@example.com", "claims-desk").unwrap_err();
        assert_eq!(wrong.kind, AppErrorKind::Unauthorized);
        assert_eq!(unknown.kind, AppErrorKind::Unauthorized);
        assert_eq!(wrong.message, unknown.message);
    }

    #[test]
    fn malformed_stored_hash_is_internal() {
        let directory = sign_in_directory("not-a-phc-string".to_string());
        let err = authenticate(&directory, "dana.lead@example.com", "claims-desk").unwrap_err();
        assert_eq!(err.kind, AppErrorKind::InternalError);
    }

    #[test]
    fn bad_input_is_a_validation_error() {
        let directory = sign_in_directory(hash_password("claims-desk").unwrap());
        let err = authenticate(&directory, "not-an-email", "").unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert!(err.field_errors.contains_key("email"));
        assert!(err.field_errors.contains_key("password"));
    }

    #[test]
    fn shipped_demo_accounts_verify() {
        let config = crate::config::parse_config(include_str!("../../../../config.toml"));
        assert!(!config.directory.accounts.is_empty());
        for account in &config.directory.accounts {
            let principal = authenticate(&config.directory, &account.email, "password")
                .unwrap_or_else(|e| panic!("{} should sign in: {e}", account.email));
            assert_eq!(principal.id, account.id);
        }
    }
}
