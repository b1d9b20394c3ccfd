//! Role-based visibility and route access decisions.
//!
//! These checks shape what the dashboard shows and where it redirects. They
//! are not a security boundary: every API behind the dashboard enforces its
//! own authorization.

use crate::navigation::{NavigationEntry, RoleRequirement};
use crate::role::Role;

/// Whether a sidebar entry should be shown for `role`.
///
/// Entries marked [`RoleRequirement::Always`] are shown to everyone.
/// Restricted entries are shown only when `role` parses to one of their roles.
pub fn is_nav_entry_visible(role: Option<&str>, entry: &NavigationEntry) -> bool {
    match entry.requires {
        RoleRequirement::Always => true,
        RoleRequirement::AnyOf(roles) => has_any_role(role, roles),
    }
}

/// Whether `role` may open a route restricted to `allow_roles`.
///
/// An empty `allow_roles` means any authenticated principal is allowed.
/// Order and duplicates in `allow_roles` do not matter.
pub fn is_route_allowed(role: Option<&str>, allow_roles: &[Role]) -> bool {
    allow_roles.is_empty() || has_any_role(role, allow_roles)
}

fn has_any_role(role: Option<&str>, roles: &[Role]) -> bool {
    Role::parse(role).is_some_and(|r| roles.contains(&r))
}
