//! Identity types shared by the authentication services and the state layer.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The credential path a user record originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    /// Email + password
    Email,
    /// Sign in with Apple
    Apple,
    /// Google sign-in
    Google,
    /// Facebook login
    Facebook,
    /// Phone number (SMS code)
    Phone,
}

impl fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AuthProvider::Email => "email",
            AuthProvider::Apple => "apple",
            AuthProvider::Google => "google",
            AuthProvider::Facebook => "facebook",
            AuthProvider::Phone => "phone",
        };
        write!(f, "{}", name)
    }
}

/// An authenticated user record
///
/// Issued by a provider and treated as immutable afterwards; a
/// re-authentication replaces the record wholesale rather than mutating it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Unique user identifier
    pub uid: String,
    /// Email address, if the provider supplied one
    pub email: Option<String>,
    /// Phone number, if the provider supplied one
    pub phone_number: Option<String>,
    /// Display name
    pub display_name: Option<String>,
    /// Profile photo URL
    pub photo_url: Option<String>,
    /// Whether the email address has been verified
    pub email_verified: bool,
    /// Whether the phone number has been verified
    pub phone_verified: bool,
    /// The credential path this record came from
    pub provider: AuthProvider,
    /// Account creation time as an RFC 3339 string
    pub created_at: String,
}

impl AuthUser {
    /// Create a user record stamped with the current time
    pub fn new(uid: impl Into<String>, provider: AuthProvider) -> Self {
        Self {
            uid: uid.into(),
            email: None,
            phone_number: None,
            display_name: None,
            photo_url: None,
            email_verified: false,
            phone_verified: false,
            provider,
            created_at: Utc::now().to_rfc3339(),
        }
    }

    /// Set the email address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the display name
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Mark the email address as verified
    pub fn email_verified(mut self, verified: bool) -> Self {
        self.email_verified = verified;
        self
    }
}

/// Result of a social sign-in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialAuthResult {
    /// Provider that completed the sign-in
    pub provider: AuthProvider,
    /// The signed-in user
    pub user: AuthUser,
    /// Whether this sign-in created the account
    pub is_new_user: bool,
}

/// Parameters for email sign-up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupCredentials {
    /// Email address
    pub email: String,
    /// Password
    pub password: String,
    /// Optional display name for the new account
    pub display_name: Option<String>,
    /// Optional password confirmation; must match `password` when present
    pub confirm_password: Option<String>,
}

/// Parameters for email sign-in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginCredentials {
    /// Email address
    pub email: String,
    /// Password
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_display() {
        assert_eq!(AuthProvider::Apple.to_string(), "apple");
        assert_eq!(AuthProvider::Email.to_string(), "email");
    }

    #[test]
    fn test_auth_user_builder() {
        let user = AuthUser::new("u-1", AuthProvider::Google)
            .with_email("someone@example.com")
            .with_display_name("Someone")
            .email_verified(true);

        assert_eq!(user.uid, "u-1");
        assert_eq!(user.provider, AuthProvider::Google);
        assert_eq!(user.email.as_deref(), Some("someone@example.com"));
        assert!(user.email_verified);
        assert!(!user.phone_verified);
    }

    #[test]
    fn test_auth_user_serialization() {
        let user = AuthUser::new("u-2", AuthProvider::Apple);
        let json = serde_json::to_string(&user).unwrap();
        let parsed: AuthUser = serde_json::from_str(&json).unwrap();
        assert_eq!(user, parsed);
    }

    #[test]
    fn test_provider_serde_rename() {
        let json = serde_json::to_string(&AuthProvider::Facebook).unwrap();
        assert_eq!(json, "\"facebook\"");
    }
}
