//! Per-route authorization checkpoint.
//!
//! The decision is a pure function of the identity state and the route's
//! allow list, so the UI re-evaluates it on every change without keeping
//! any memory of earlier decisions.

use crate::policy::is_route_allowed;
use crate::principal::Principal;
use crate::role::Role;
use crate::routing::{DEFAULT_AUTHORIZED_PATH, LOGIN_PATH};

/// Phase of a guard evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    /// The identity service has not finished its session check.
    Loading,
    /// The session check finished without a principal.
    Unauthenticated,
    /// A principal is present and the route policy has been applied.
    Decided,
}

/// What the guarded route should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render nothing and do not navigate.
    RenderNothing,
    /// Navigate away. `replace` swaps the history entry instead of pushing.
    Redirect { to: &'static str, replace: bool },
    /// Render the protected content unchanged.
    Render,
}

/// Redirect targets used by the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardTargets {
    pub login: &'static str,
    pub default_authorized: &'static str,
}

impl Default for GuardTargets {
    fn default() -> Self {
        Self {
            login: LOGIN_PATH,
            default_authorized: DEFAULT_AUTHORIZED_PATH,
        }
    }
}

/// Classify the identity inputs into a [`GuardState`].
pub fn guard_state(loading: bool, principal: Option<&Principal>) -> GuardState {
    match (loading, principal) {
        (true, _) => GuardState::Loading,
        (false, None) => GuardState::Unauthenticated,
        (false, Some(_)) => GuardState::Decided,
    }
}

/// Decide whether to render, redirect, or wait.
///
/// Access denial is a silent redirect to `targets.default_authorized`; there
/// is no error page. Every redirect replaces the current history entry so
/// the back button does not bounce into the guard again.
pub fn evaluate_guard(
    loading: bool,
    principal: Option<&Principal>,
    allow_roles: &[Role],
    targets: &GuardTargets,
) -> GuardDecision {
    match (guard_state(loading, principal), principal) {
        (GuardState::Loading, _) => GuardDecision::RenderNothing,
        (GuardState::Decided, Some(p)) if is_route_allowed(p.raw_role(), allow_roles) => {
            GuardDecision::Render
        }
        (GuardState::Decided, Some(_)) => GuardDecision::Redirect {
            to: targets.default_authorized,
            replace: true,
        },
        _ => GuardDecision::Redirect {
            to: targets.login,
            replace: true,
        },
    }
}
