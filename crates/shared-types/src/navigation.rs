use crate::policy::is_nav_entry_visible;
use crate::role::{Role, MANAGER_ROLES};
use crate::routing;

/// Who may see a navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleRequirement {
    /// Shown to every authenticated principal.
    Always,
    /// Shown only when the principal holds one of these roles.
    AnyOf(&'static [Role]),
}

/// Icon reference for a navigation entry. The UI layer maps it to a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Overview,
    Claims,
    Users,
    Settings,
}

/// One item in the primary sidebar navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationEntry {
    pub label: &'static str,
    pub route: &'static str,
    pub icon: NavIcon,
    pub requires: RoleRequirement,
}

impl NavigationEntry {
    /// Highlight the entry for its own route and anything nested below it.
    pub fn is_active(&self, current_path: &str) -> bool {
        current_path.starts_with(self.route)
    }
}

/// Sidebar navigation in display order. Logs, screenshots and insights are
/// reached from a user's detail page, not from here.
pub const NAVIGATION: &[NavigationEntry] = &[
    NavigationEntry {
        label: "Overview",
        route: routing::OVERVIEW_PATH,
        icon: NavIcon::Overview,
        requires: RoleRequirement::Always,
    },
    NavigationEntry {
        label: "Claims",
        route: routing::CLAIMS_PATH,
        icon: NavIcon::Claims,
        requires: RoleRequirement::Always,
    },
    NavigationEntry {
        label: "Users",
        route: routing::USERS_PATH,
        icon: NavIcon::Users,
        requires: RoleRequirement::AnyOf(MANAGER_ROLES),
    },
    NavigationEntry {
        label: "Settings",
        route: routing::SETTINGS_PATH,
        icon: NavIcon::Settings,
        requires: RoleRequirement::Always,
    },
];

/// Entries from [`NAVIGATION`] visible to `role`, in display order.
pub fn visible_entries(role: Option<&str>) -> Vec<&'static NavigationEntry> {
    NAVIGATION
        .iter()
        .filter(|entry| is_nav_entry_visible(role, entry))
        .collect()
}
