//! Social sign-in providers
//!
//! [`SocialAuthService`] is the capability boundary for Apple, Google, and
//! Facebook sign-in. The mock implementation waits a fixed simulated latency
//! and returns a deterministic canned user per provider; the live variant is
//! a stub that fails until real OAuth flows are integrated. Which one the app
//! gets is decided exactly once, by [`social_auth_service`].

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::user::{AuthProvider, AuthUser, SocialAuthResult};
use crate::{AuthError, Result};

/// Simulated network latency for the mock provider
pub const MOCK_LATENCY: Duration = Duration::from_millis(500);

/// Social sign-in capability
///
/// Each operation returns the provider tag, the signed-in user, and whether
/// the sign-in created the account.
#[async_trait]
pub trait SocialAuthService: Send + Sync {
    /// Sign in with Apple
    async fn sign_in_with_apple(&self) -> Result<SocialAuthResult>;

    /// Sign in with Google
    async fn sign_in_with_google(&self) -> Result<SocialAuthResult>;

    /// Sign in with Facebook
    async fn sign_in_with_facebook(&self) -> Result<SocialAuthResult>;
}

/// Which authentication backend the app is built against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    /// Canned users and simulated latency; never fails
    #[default]
    Mock,
    /// Real identity providers; currently stubbed
    Live,
}

/// Authentication configuration
///
/// The single chokepoint that gates mock vs. real behaviour.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Backend selection
    pub mode: AuthMode,
    /// Simulated latency applied by mock services
    pub latency: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self { mode: AuthMode::Mock, latency: MOCK_LATENCY }
    }
}

/// Build the social auth service selected by the configuration
pub fn social_auth_service(config: &AuthConfig) -> Arc<dyn SocialAuthService> {
    match config.mode {
        AuthMode::Mock => Arc::new(MockSocialAuthService::with_latency(config.latency)),
        AuthMode::Live => Arc::new(LiveSocialAuthService),
    }
}

/// Mock social sign-in
///
/// Returns a canned user record per provider after a fixed delay. The mock
/// path never fails.
#[derive(Debug, Clone)]
pub struct MockSocialAuthService {
    latency: Duration,
}

impl MockSocialAuthService {
    /// Create a mock service with the default simulated latency
    pub fn new() -> Self {
        Self { latency: MOCK_LATENCY }
    }

    /// Create a mock service with a custom latency
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    fn canned_user(provider: AuthProvider) -> AuthUser {
        AuthUser::new(format!("mock-{}-id", provider), provider)
            .with_email(format!("mock@{}.com", provider))
            .with_display_name(match provider {
                AuthProvider::Apple => "Mock Apple User",
                AuthProvider::Google => "Mock Google User",
                AuthProvider::Facebook => "Mock Facebook User",
                AuthProvider::Email => "Mock Email User",
                AuthProvider::Phone => "Mock Phone User",
            })
            .email_verified(true)
    }

    async fn sign_in(&self, provider: AuthProvider) -> Result<SocialAuthResult> {
        tokio::time::sleep(self.latency).await;
        tracing::debug!(%provider, "mock social sign-in resolved");

        Ok(SocialAuthResult {
            provider,
            user: Self::canned_user(provider),
            is_new_user: false,
        })
    }
}

impl Default for MockSocialAuthService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SocialAuthService for MockSocialAuthService {
    async fn sign_in_with_apple(&self) -> Result<SocialAuthResult> {
        self.sign_in(AuthProvider::Apple).await
    }

    async fn sign_in_with_google(&self) -> Result<SocialAuthResult> {
        self.sign_in(AuthProvider::Google).await
    }

    async fn sign_in_with_facebook(&self) -> Result<SocialAuthResult> {
        self.sign_in(AuthProvider::Facebook).await
    }
}

/// Live social sign-in stub
///
/// Every operation fails with a "not implemented" error until real OAuth
/// integrations replace it.
#[derive(Debug, Clone, Default)]
pub struct LiveSocialAuthService;

#[async_trait]
impl SocialAuthService for LiveSocialAuthService {
    async fn sign_in_with_apple(&self) -> Result<SocialAuthResult> {
        Err(AuthError::NotImplemented(AuthProvider::Apple))
    }

    async fn sign_in_with_google(&self) -> Result<SocialAuthResult> {
        Err(AuthError::NotImplemented(AuthProvider::Google))
    }

    async fn sign_in_with_facebook(&self) -> Result<SocialAuthResult> {
        Err(AuthError::NotImplemented(AuthProvider::Facebook))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_mock_apple_sign_in() {
        let service = MockSocialAuthService::new();
        let result = service.sign_in_with_apple().await.unwrap();

        assert_eq!(result.provider, AuthProvider::Apple);
        assert_eq!(result.user.provider, AuthProvider::Apple);
        assert_eq!(result.user.uid, "mock-apple-id");
        assert_eq!(result.user.email.as_deref(), Some("mock@apple.com"));
        assert!(!result.is_new_user);
    }

    #[tokio::test(start_paused = true)]
    async fn test_mock_providers_are_distinct() {
        let service = MockSocialAuthService::new();
        let google = service.sign_in_with_google().await.unwrap();
        let facebook = service.sign_in_with_facebook().await.unwrap();

        assert_eq!(google.user.provider, AuthProvider::Google);
        assert_eq!(facebook.user.provider, AuthProvider::Facebook);
        assert_ne!(google.user.uid, facebook.user.uid);
    }

    #[tokio::test(start_paused = true)]
    async fn test_mock_respects_configured_latency() {
        let service = MockSocialAuthService::with_latency(Duration::from_millis(50));
        let start = tokio::time::Instant::now();
        service.sign_in_with_apple().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_live_stub_always_fails() {
        let service = LiveSocialAuthService;
        let err = service.sign_in_with_apple().await.unwrap_err();
        assert!(err.to_string().contains("not implemented"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_config_selects_mock() {
        let service = social_auth_service(&AuthConfig::default());
        let result = service.sign_in_with_google().await.unwrap();
        assert_eq!(result.provider, AuthProvider::Google);
    }

    #[tokio::test]
    async fn test_config_selects_live() {
        let config = AuthConfig { mode: AuthMode::Live, ..AuthConfig::default() };
        let service = social_auth_service(&config);
        assert!(service.sign_in_with_facebook().await.is_err());
    }
}
