use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Fallback text when a server error cannot be decoded.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Categorization of errors crossing the server function boundary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    ValidationError,
    Unauthorized,
    Forbidden,
    NotFound,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AppErrorKind::ValidationError => "ValidationError",
            AppErrorKind::Unauthorized => "Unauthorized",
            AppErrorKind::Forbidden => "Forbidden",
            AppErrorKind::NotFound => "NotFound",
            AppErrorKind::InternalError => "InternalError",
        };
        f.write_str(name)
    }
}

/// Structured error shared by the server functions and the dashboard.
///
/// Server functions serialize it as JSON into the `ServerFnError` message;
/// the client pulls it back out with [`AppError::from_server_error`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            field_errors,
            ..Self::new(AppErrorKind::ValidationError, message)
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Forbidden, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::NotFound, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::InternalError, message)
    }

    /// Recover an `AppError` from a `ServerFnError` string.
    ///
    /// The payload usually arrives wrapped, e.g.
    /// `error running server function: {"kind":"Unauthorized",...} (details: None)`,
    /// so the outermost `{...}` span is parsed when a direct parse fails.
    pub fn from_server_error(error_message: &str) -> Option<Self> {
        if let Ok(err) = serde_json::from_str::<Self>(error_message) {
            return Some(err);
        }
        let start = error_message.find('{')?;
        let end = error_message.rfind('}')?;
        if end > start {
            serde_json::from_str(&error_message[start..=end]).ok()
        } else {
            None
        }
    }

    /// Per-field validation messages, empty when there are none.
    pub fn parse_field_errors(error_string: &str) -> HashMap<String, String> {
        Self::from_server_error(error_string)
            .map(|e| e.field_errors)
            .unwrap_or_default()
    }

    /// Message suitable for showing to the user.
    pub fn friendly_message(error_string: &str) -> String {
        Self::from_server_error(error_string)
            .map(|e| e.message)
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(feature = "validation")]
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let field_errors = errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, errs)| {
                let first = errs.first()?;
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {field}"));
                Some((field.to_string(), msg))
            })
            .collect();
        AppError::validation("Validation failed", field_errors)
    }
}
