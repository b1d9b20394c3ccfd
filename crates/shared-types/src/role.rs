use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized role key used when a principal carries no role at all.
/// Matches no restricted navigation entry or route.
pub const NO_ROLE: &str = "NONE";

/// Organizational role controlling which dashboard sections are reachable.
///
/// - `CSuite` — executive access, sees every section.
/// - `DepartmentHead` — manages a department, sees every section.
/// - `Staff` — regular member, no access to user management or insights.
///
/// Roles travel as upper-case keys (`C_SUITE`, `DEPARTMENT_HEAD`, `STAFF`).
/// Any other value coming from the identity service is not a `Role`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Role {
    #[serde(rename = "C_SUITE")]
    CSuite,
    #[serde(rename = "DEPARTMENT_HEAD")]
    DepartmentHead,
    #[serde(rename = "STAFF")]
    Staff,
}

/// All known roles in privilege order (highest first).
pub const ALL_ROLES: &[Role] = &[Role::CSuite, Role::DepartmentHead, Role::Staff];

/// Roles allowed into user management and per-user insights.
pub const MANAGER_ROLES: &[Role] = &[Role::CSuite, Role::DepartmentHead];

impl Role {
    /// Upper-case key as stored by the identity service.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::CSuite => "C_SUITE",
            Role::DepartmentHead => "DEPARTMENT_HEAD",
            Role::Staff => "STAFF",
        }
    }

    /// Human-readable label.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::CSuite => "C-Suite",
            Role::DepartmentHead => "Department Head",
            Role::Staff => "Staff",
        }
    }

    /// Parse a raw role string. Comparison is case-insensitive and ignores
    /// surrounding whitespace. Unknown, blank or absent input yields `None`.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        match normalize_role(raw).as_str() {
            "C_SUITE" => Some(Role::CSuite),
            "DEPARTMENT_HEAD" => Some(Role::DepartmentHead),
            "STAFF" => Some(Role::Staff),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trim and upper-case a raw role string. Absent or blank input becomes [`NO_ROLE`].
pub fn normalize_role(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_uppercase(),
        _ => NO_ROLE.to_string(),
    }
}
