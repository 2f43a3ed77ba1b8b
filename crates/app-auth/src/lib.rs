//! Authentication boundary for CentreGuide
//!
//! This crate defines the identity types shared across the app and the
//! provider-facing authentication services: social sign-in (Apple, Google,
//! Facebook) and email sign-up/sign-in. Both services are capability traits
//! with two implementations: a mock that simulates network latency and
//! returns canned records, and a live variant that is stubbed until real
//! OAuth integrations land. The implementation is selected once, at
//! construction, through [`AuthConfig`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod email;
pub mod social;
pub mod user;

use thiserror::Error;

pub use email::{email_auth_service, EmailAuthService, MockEmailAuthService};
pub use social::{
    social_auth_service, AuthConfig, AuthMode, MockSocialAuthService, SocialAuthService,
    MOCK_LATENCY,
};
pub use user::{AuthProvider, AuthUser, LoginCredentials, SignupCredentials, SocialAuthResult};

/// Authentication error types
#[derive(Debug, Error)]
pub enum AuthError {
    /// Credentials were rejected before reaching any provider
    #[error("{0}")]
    InvalidCredentials(String),

    /// A live provider path was invoked but is not wired up yet
    #[error("Real {0} auth not implemented")]
    NotImplemented(AuthProvider),
}

/// Result type for authentication operations
pub type Result<T> = std::result::Result<T, AuthError>;
