use serde::{Deserialize, Serialize};

use crate::role::{normalize_role, Role, NO_ROLE};

/// Placeholder shown where a principal has no usable role.
pub const ROLE_PLACEHOLDER: &str = "—";

/// The authenticated user for the current session.
///
/// Created by the identity service on sign-in and dropped on sign-out or
/// session expiry. The dashboard only ever reads it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Principal {
    pub id: i64,
    pub company_username: String,
    pub display_name: String,
    pub email: String,
    /// Role key as issued by newer identity payloads. Preferred over `role`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Organizational unit, e.g. "Claims Operations".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl Principal {
    /// The raw role string to authorize with: `role_key` when non-blank, else `role`.
    pub fn raw_role(&self) -> Option<&str> {
        self.role_key
            .as_deref()
            .filter(|r| !r.trim().is_empty())
            .or(self.role.as_deref())
    }

    /// The recognized role, if any.
    pub fn known_role(&self) -> Option<Role> {
        Role::parse(self.raw_role())
    }

    /// Normalized role for display, or a dash when the principal has none.
    pub fn role_label(&self) -> String {
        let normalized = normalize_role(self.raw_role());
        if normalized == NO_ROLE {
            ROLE_PLACEHOLDER.to_string()
        } else {
            normalized
        }
    }

    /// Sidebar caption: "Department • ROLE", or only the role label.
    pub fn caption(&self) -> String {
        match self.department.as_deref().map(str::trim) {
            Some(dept) if !dept.is_empty() => format!("{dept} \u{2022} {}", self.role_label()),
            _ => self.role_label(),
        }
    }

    /// Up to two initials from the display name, for avatars.
    pub fn initials(&self) -> String {
        self.display_name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}
