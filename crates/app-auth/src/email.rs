//! Email sign-up and sign-in
//!
//! [`EmailAuthService`] covers the email/password credential path. The mock
//! implementation checks credential shape locally and mints a user record;
//! invalid credentials fail with a human-readable message. The live variant
//! is stubbed the same way as the social providers.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::social::{AuthConfig, AuthMode, MOCK_LATENCY};
use crate::user::{AuthProvider, AuthUser, LoginCredentials, SignupCredentials};
use crate::{AuthError, Result};

/// Minimum accepted password length
const MIN_PASSWORD_LEN: usize = 6;

/// Email credential capability
#[async_trait]
pub trait EmailAuthService: Send + Sync {
    /// Create an account from email credentials
    async fn sign_up(&self, credentials: SignupCredentials) -> Result<AuthUser>;

    /// Sign in with email credentials
    async fn sign_in(&self, credentials: LoginCredentials) -> Result<AuthUser>;

    /// Sign out the current user
    async fn sign_out(&self) -> Result<()>;
}

/// Build the email auth service selected by the configuration
pub fn email_auth_service(config: &AuthConfig) -> Arc<dyn EmailAuthService> {
    match config.mode {
        AuthMode::Mock => Arc::new(MockEmailAuthService::with_latency(config.latency)),
        AuthMode::Live => Arc::new(LiveEmailAuthService),
    }
}

/// Mock email authentication
///
/// Accepts any well-formed credentials; there is no account database behind
/// it, so sign-in mints a fresh record the same way sign-up does.
#[derive(Debug, Clone)]
pub struct MockEmailAuthService {
    latency: Duration,
}

impl MockEmailAuthService {
    /// Create a mock service with the default simulated latency
    pub fn new() -> Self {
        Self { latency: MOCK_LATENCY }
    }

    /// Create a mock service with a custom latency
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    fn check_email(email: &str) -> Result<()> {
        let trimmed = email.trim();
        let well_formed = trimmed
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
        if well_formed {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials("Invalid email address".to_string()))
        }
    }

    fn check_password(password: &str) -> Result<()> {
        if password.len() >= MIN_PASSWORD_LEN {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )))
        }
    }

    fn mint_user(email: &str, display_name: Option<String>) -> AuthUser {
        let mut user = AuthUser::new(format!("mock-email-{}", email.trim().to_lowercase()),
            AuthProvider::Email)
            .with_email(email.trim())
            .email_verified(false);
        user.display_name = display_name;
        user
    }
}

impl Default for MockEmailAuthService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailAuthService for MockEmailAuthService {
    async fn sign_up(&self, credentials: SignupCredentials) -> Result<AuthUser> {
        Self::check_email(&credentials.email)?;
        Self::check_password(&credentials.password)?;
        if let Some(confirm) = &credentials.confirm_password {
            if confirm != &credentials.password {
                return Err(AuthError::InvalidCredentials(
                    "Passwords do not match".to_string(),
                ));
            }
        }

        tokio::time::sleep(self.latency).await;
        tracing::debug!(email = %credentials.email, "mock email sign-up resolved");

        Ok(Self::mint_user(&credentials.email, credentials.display_name))
    }

    async fn sign_in(&self, credentials: LoginCredentials) -> Result<AuthUser> {
        Self::check_email(&credentials.email)?;
        Self::check_password(&credentials.password)?;

        tokio::time::sleep(self.latency).await;
        tracing::debug!(email = %credentials.email, "mock email sign-in resolved");

        Ok(Self::mint_user(&credentials.email, None))
    }

    async fn sign_out(&self) -> Result<()> {
        Ok(())
    }
}

/// Live email authentication stub
#[derive(Debug, Clone, Default)]
pub struct LiveEmailAuthService;

#[async_trait]
impl EmailAuthService for LiveEmailAuthService {
    async fn sign_up(&self, _credentials: SignupCredentials) -> Result<AuthUser> {
        Err(AuthError::NotImplemented(AuthProvider::Email))
    }

    async fn sign_in(&self, _credentials: LoginCredentials) -> Result<AuthUser> {
        Err(AuthError::NotImplemented(AuthProvider::Email))
    }

    async fn sign_out(&self) -> Result<()> {
        Err(AuthError::NotImplemented(AuthProvider::Email))
    }
}
