use serde::{Deserialize, Serialize};

use crate::feature_flags::FeatureFlags;
use crate::principal::Principal;

/// Top-level structure of `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub directory: DirectoryConfig,
}

/// Accounts known to the bundled identity service.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DirectoryConfig {
    #[serde(default)]
    pub accounts: Vec<DirectoryAccount>,
}

/// One sign-in account. `password_hash` is an argon2 PHC string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DirectoryAccount {
    pub id: i64,
    pub email: String,
    pub company_username: String,
    pub display_name: String,
    pub password_hash: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

impl DirectoryConfig {
    /// Find an account by email, ignoring case and surrounding whitespace.
    pub fn find_by_email(&self, email: &str) -> Option<&DirectoryAccount> {
        let email = email.trim();
        self.accounts
            .iter()
            .find(|a| a.email.eq_ignore_ascii_case(email))
    }
}

impl DirectoryAccount {
    /// The principal this account signs in as. The role string is passed
    /// through untouched; authorization decides what it is worth.
    pub fn to_principal(&self) -> Principal {
        Principal {
            id: self.id,
            company_username: self.company_username.clone(),
            display_name: self.display_name.clone(),
            email: self.email.clone(),
            role_key: self.role.clone(),
            role: None,
            department: self.department.clone(),
        }
    }
}
