use pretty_assertions::assert_eq;
use server::auth::jwt;
use shared_types::{
    allowed_roles_for, evaluate_guard, GuardDecision, GuardTargets, CLAIMS_PATH, LOGIN_PATH,
    OVERVIEW_PATH, USERS_PATH,
};

use crate::common;

/// Resolve a principal the way the session check does: sign, then decode.
fn signed_in(role: Option<&str>) -> shared_types::Principal {
    let token = common::token_for(role);
    jwt::validate_session_token(&token)
        .expect("token should validate")
        .to_principal()
}

fn decide(loading: bool, principal: Option<&shared_types::Principal>, path: &str) -> GuardDecision {
    evaluate_guard(
        loading,
        principal,
        allowed_roles_for(path),
        &GuardTargets::default(),
    )
}

#[test]
fn loading_session_renders_nothing_on_every_route() {
    for path in [OVERVIEW_PATH, USERS_PATH, "/dashboard/users/jdoe"] {
        assert_eq!(decide(true, None, path), GuardDecision::RenderNothing);
    }
}

#[test]
fn missing_session_redirects_to_login() {
    assert_eq!(
        decide(false, None, CLAIMS_PATH),
        GuardDecision::Redirect {
            to: LOGIN_PATH,
            replace: true
        }
    );
}

#[test]
fn staff_session_is_bounced_from_users() {
    let staff = signed_in(Some("STAFF"));
    assert_eq!(
        decide(false, Some(&staff), USERS_PATH),
        GuardDecision::Redirect {
            to: OVERVIEW_PATH,
            replace: true
        }
    );
    assert_eq!(decide(false, Some(&staff), CLAIMS_PATH), GuardDecision::Render);
}

#[test]
fn manager_session_reaches_user_detail() {
    for role in ["C_SUITE", "DEPARTMENT_HEAD"] {
        let manager = signed_in(Some(role));
        assert_eq!(
            decide(false, Some(&manager), "/dashboard/users/jdoe"),
            GuardDecision::Render
        );
    }
}

#[test]
fn roleless_session_only_reaches_open_routes() {
    let nobody = signed_in(None);
    assert_eq!(decide(false, Some(&nobody), OVERVIEW_PATH), GuardDecision::Render);
    assert_eq!(
        decide(false, Some(&nobody), USERS_PATH),
        GuardDecision::Redirect {
            to: OVERVIEW_PATH,
            replace: true
        }
    );
}

#[test]
fn sign_out_flips_decision_to_login() {
    let manager = signed_in(Some("C_SUITE"));
    assert_eq!(decide(false, Some(&manager), USERS_PATH), GuardDecision::Render);
    assert_eq!(
        decide(false, None, USERS_PATH),
        GuardDecision::Redirect {
            to: LOGIN_PATH,
            replace: true
        }
    );
}
