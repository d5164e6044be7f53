//! Error taxonomy for every client-side operation.
//!
//! The `Display` output of each variant is the exact text a view renders
//! inline, so callers never need their own mapping for the common cases.

use serde::Deserialize;

/// Shown when an action needs identity and no token is stored.
pub const MSG_AUTH_REQUIRED: &str = "Authentication required. Please login first.";
/// Shown when a stored token carries no usable user id.
pub const MSG_IDENTITY: &str = "Could not retrieve user information. Please login again.";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Local input check failed before any request was made.
    #[error("{0}")]
    Validation(String),
    /// No token is stored but the action needs one.
    #[error("{0}")]
    AuthRequired(String),
    /// A token is stored but no user id can be read from it.
    #[error("{0}")]
    Identity(String),
    /// The API answered with a non-success status.
    #[error("{message}")]
    Remote { status: u16, message: String },
    /// The request never produced a response.
    #[error("{message}")]
    Transport { message: String },
    /// A success response whose body could not be read.
    #[error("{message}")]
    Decode { message: String },
}

/// Error payload the API sends on failures. Either field may carry the text.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn auth_required() -> Self {
        Self::AuthRequired(MSG_AUTH_REQUIRED.to_string())
    }

    pub fn identity() -> Self {
        Self::Identity(MSG_IDENTITY.to_string())
    }

    /// Build a [`ApiError::Remote`] from a raw response body, preferring the
    /// server's own message over `fallback`.
    pub fn remote(status: u16, body: &str, fallback: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        let message = parsed
            .error
            .or(parsed.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());
        Self::Remote { status, message }
    }

    /// Text to render next to the form or list that triggered the error.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// True for errors that mean the user must log in (again).
    pub fn needs_login(&self) -> bool {
        matches!(
            self,
            Self::AuthRequired(_) | Self::Identity(_) | Self::Remote { status: 401, .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_prefers_error_field() {
        let err = ApiError::remote(400, r#"{"error":"Invalid credentials"}"#, "Login failed");
        assert_eq!(
            err,
            ApiError::Remote {
                status: 400,
                message: "Invalid credentials".to_string()
            }
        );
        assert_eq!(err.user_message(), "Invalid credentials");
    }

    #[test]
    fn test_remote_accepts_message_field() {
        let err = ApiError::remote(409, r#"{"message":"Email taken"}"#, "Registration failed");
        assert_eq!(err.user_message(), "Email taken");
    }

    #[test]
    fn test_remote_falls_back() {
        for body in ["", "<html>502</html>", r#"{"error":""}"#, r#"{"other":1}"#] {
            let err = ApiError::remote(502, body, "Failed to load jobs. Please try again later.");
            assert_eq!(
                err.user_message(),
                "Failed to load jobs. Please try again later."
            );
        }
    }

    #[test]
    fn test_needs_login() {
        assert!(ApiError::auth_required().needs_login());
        assert!(ApiError::identity().needs_login());
        assert!(ApiError::remote(401, "", "x").needs_login());
        assert!(!ApiError::remote(500, "", "x").needs_login());
        assert!(!ApiError::validation("Name is required").needs_login());
    }

    #[test]
    fn test_default_messages() {
        assert_eq!(ApiError::auth_required().to_string(), MSG_AUTH_REQUIRED);
        assert_eq!(ApiError::identity().to_string(), MSG_IDENTITY);
    }
}
