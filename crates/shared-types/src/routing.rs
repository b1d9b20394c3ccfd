use crate::role::{Role, MANAGER_ROLES};

pub const LANDING_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const OVERVIEW_PATH: &str = "/dashboard/overview";
pub const CLAIMS_PATH: &str = "/dashboard/claims";
pub const INSIGHTS_PATH: &str = "/dashboard/insights";
pub const USERS_PATH: &str = "/dashboard/users";
pub const USER_DETAIL_PATH: &str = "/dashboard/users/:company_username";
pub const PROFILE_PATH: &str = "/dashboard/profile";
pub const SETTINGS_PATH: &str = "/dashboard/settings";

/// Where a signed-in principal lands when a route turns them away.
pub const DEFAULT_AUTHORIZED_PATH: &str = OVERVIEW_PATH;

/// Binds a route pattern to the roles allowed to open it.
/// An empty `allow_roles` admits any authenticated principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteAuthorization {
    pub pattern: &'static str,
    pub allow_roles: &'static [Role],
}

/// Authorization for every protected dashboard route.
pub const ROUTE_AUTHORIZATIONS: &[RouteAuthorization] = &[
    RouteAuthorization { pattern: OVERVIEW_PATH, allow_roles: &[] },
    RouteAuthorization { pattern: CLAIMS_PATH, allow_roles: &[] },
    RouteAuthorization { pattern: INSIGHTS_PATH, allow_roles: MANAGER_ROLES },
    RouteAuthorization { pattern: USERS_PATH, allow_roles: MANAGER_ROLES },
    RouteAuthorization { pattern: USER_DETAIL_PATH, allow_roles: MANAGER_ROLES },
    RouteAuthorization { pattern: PROFILE_PATH, allow_roles: &[] },
    RouteAuthorization { pattern: SETTINGS_PATH, allow_roles: &[] },
];

impl RouteAuthorization {
    /// Match a concrete path against this pattern. `:name` segments match
    /// any single non-empty segment.
    pub fn matches(&self, path: &str) -> bool {
        let path = strip_path(path);
        let mut want = self.pattern.split('/');
        let mut got = path.split('/');
        loop {
            match (want.next(), got.next()) {
                (None, None) => return true,
                (Some(w), Some(g)) if w.starts_with(':') && !g.is_empty() => {}
                (Some(w), Some(g)) if w == g => {}
                _ => return false,
            }
        }
    }
}

/// Roles allowed on `path`. Paths not in [`ROUTE_AUTHORIZATIONS`] get the
/// empty set, i.e. no role restriction.
pub fn allowed_roles_for(path: &str) -> &'static [Role] {
    ROUTE_AUTHORIZATIONS
        .iter()
        .find(|auth| auth.matches(path))
        .map(|auth| auth.allow_roles)
        .unwrap_or(&[])
}

/// Drop the query string, fragment and any trailing slash (except for `/`).
fn strip_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}
