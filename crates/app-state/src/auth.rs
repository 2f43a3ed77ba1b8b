//! Authentication state slice
//!
//! [`AuthState`] is an immutable snapshot of the signed-in session.
//! [`AuthTransition`] enumerates every way the slice can change, and
//! [`AuthState::apply`] is the only code that computes the next state, which
//! keeps the `is_authenticated == user.is_some()` invariant in one place.
//!
//! [`AuthStore`] drives the async sign-in flows: it commits a pending
//! transition, awaits the provider outside the lock, then commits the
//! fulfilled or rejected transition. Overlapping flows are not serialized;
//! whichever completes last determines the final state.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::watch;

use app_auth::{
    email_auth_service, social_auth_service, AuthConfig, AuthError, AuthUser, EmailAuthService,
    LoginCredentials, SignupCredentials, SocialAuthService,
};

/// Snapshot of the authentication slice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthState {
    /// The signed-in user, if any
    pub user: Option<AuthUser>,
    /// Always equal to `user.is_some()`
    pub is_authenticated: bool,
    /// Whether a sign-in or sign-up flow is in flight
    pub is_loading: bool,
    /// Message from the most recent failed flow, cleared when a new one starts
    pub error: Option<String>,
    /// Whether the user has completed onboarding
    pub onboarding_complete: bool,
}

/// A single change to the authentication slice
#[derive(Debug, Clone, PartialEq)]
pub enum AuthTransition {
    /// A sign-in or sign-up flow started
    Pending,
    /// A flow resolved with a signed-in user
    SignedIn(AuthUser),
    /// The session ended
    SignedOut,
    /// A flow failed
    Rejected(String),
    /// Replace the user record directly
    SetUser(Option<AuthUser>),
    /// Record onboarding progress
    SetOnboardingComplete(bool),
    /// Drop the stored error message
    ClearError,
    /// Store an error message without touching the session
    SetError(String),
}

impl AuthState {
    /// Compute the state after a transition
    ///
    /// `Rejected` keeps the current user and authentication flag; a failed
    /// re-authentication never signs an existing session out.
    pub fn apply(&self, transition: AuthTransition) -> AuthState {
        let mut next = self.clone();
        match transition {
            AuthTransition::Pending => {
                next.is_loading = true;
                next.error = None;
            }
            AuthTransition::SignedIn(user) => {
                next.user = Some(user);
                next.is_loading = false;
                next.error = None;
                next.onboarding_complete = true;
            }
            AuthTransition::SignedOut => {
                next.user = None;
                next.is_loading = false;
                next.error = None;
                next.onboarding_complete = false;
            }
            AuthTransition::Rejected(message) => {
                next.is_loading = false;
                next.error = Some(message);
            }
            AuthTransition::SetUser(user) => {
                next.user = user;
            }
            AuthTransition::SetOnboardingComplete(complete) => {
                next.onboarding_complete = complete;
            }
            AuthTransition::ClearError => {
                next.error = None;
            }
            AuthTransition::SetError(message) => {
                next.error = Some(message);
            }
        }
        next.is_authenticated = next.user.is_some();
        next
    }
}

/// Store driving the authentication slice
///
/// Cheap to clone via `Arc`; all clones share the same state.
pub struct AuthStore {
    state: RwLock<AuthState>,
    tx: watch::Sender<AuthState>,
    social: Arc<dyn SocialAuthService>,
    email: Arc<dyn EmailAuthService>,
}

impl AuthStore {
    /// Create a store over the given services
    pub fn new(social: Arc<dyn SocialAuthService>, email: Arc<dyn EmailAuthService>) -> Arc<Self> {
        let state = AuthState::default();
        let (tx, _rx) = watch::channel(state.clone());
        Arc::new(Self { state: RwLock::new(state), tx, social, email })
    }

    /// Create a store with the services selected by the configuration
    pub fn from_config(config: &AuthConfig) -> Arc<Self> {
        Self::new(social_auth_service(config), email_auth_service(config))
    }

    /// Current state snapshot
    pub fn snapshot(&self) -> AuthState {
        self.state.read().clone()
    }

    /// Subscribe to committed states
    ///
    /// The receiver starts at the current state and observes every commit
    /// made after subscription.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.tx.subscribe()
    }

    /// Apply a transition under the write lock and broadcast the result
    fn commit(&self, transition: AuthTransition) -> AuthState {
        let mut guard = self.state.write();
        let next = guard.apply(transition);
        *guard = next.clone();
        drop(guard);
        self.tx.send_replace(next.clone());
        next
    }

    /// Sign in with Apple
    pub async fn sign_in_with_apple(&self) -> Result<AuthUser, AuthError> {
        self.commit(AuthTransition::Pending);
        let result = self.social.sign_in_with_apple().await;
        self.finish_sign_in("apple", result.map(|r| r.user))
    }

    /// Sign in with Google
    pub async fn sign_in_with_google(&self) -> Result<AuthUser, AuthError> {
        self.commit(AuthTransition::Pending);
        let result = self.social.sign_in_with_google().await;
        self.finish_sign_in("google", result.map(|r| r.user))
    }

    /// Sign in with Facebook
    pub async fn sign_in_with_facebook(&self) -> Result<AuthUser, AuthError> {
        self.commit(AuthTransition::Pending);
        let result = self.social.sign_in_with_facebook().await;
        self.finish_sign_in("facebook", result.map(|r| r.user))
    }

    /// Create an account with email credentials
    pub async fn sign_up_with_email(
        &self,
        credentials: SignupCredentials,
    ) -> Result<AuthUser, AuthError> {
        self.commit(AuthTransition::Pending);
        let result = self.email.sign_up(credentials).await;
        self.finish_sign_in("email", result)
    }

    /// Sign in with email credentials
    pub async fn sign_in_with_email(
        &self,
        credentials: LoginCredentials,
    ) -> Result<AuthUser, AuthError> {
        self.commit(AuthTransition::Pending);
        let result = self.email.sign_in(credentials).await;
        self.finish_sign_in("email", result)
    }

    /// End the current session
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        self.commit(AuthTransition::Pending);
        match self.email.sign_out().await {
            Ok(()) => {
                tracing::info!("signed out");
                self.commit(AuthTransition::SignedOut);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "sign-out failed");
                self.commit(AuthTransition::Rejected(e.to_string()));
                Err(e)
            }
        }
    }

    fn finish_sign_in(
        &self,
        flow: &str,
        result: Result<AuthUser, AuthError>,
    ) -> Result<AuthUser, AuthError> {
        match result {
            Ok(user) => {
                tracing::info!(flow, uid = %user.uid, "sign-in fulfilled");
                self.commit(AuthTransition::SignedIn(user.clone()));
                Ok(user)
            }
            Err(e) => {
                tracing::warn!(flow, error = %e, "sign-in rejected");
                self.commit(AuthTransition::Rejected(e.to_string()));
                Err(e)
            }
        }
    }

    /// Replace the user record directly
    pub fn set_user(&self, user: Option<AuthUser>) {
        self.commit(AuthTransition::SetUser(user));
    }

    /// Record onboarding progress
    pub fn set_onboarding_complete(&self, complete: bool) {
        self.commit(AuthTransition::SetOnboardingComplete(complete));
    }

    /// Drop the stored error message
    pub fn clear_error(&self) {
        self.commit(AuthTransition::ClearError);
    }

    /// Store an error message without touching the session
    pub fn set_error(&self, message: impl Into<String>) {
        self.commit(AuthTransition::SetError(message.into()));
    }
}

impl std::fmt::Debug for AuthStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthStore").field("state", &self.snapshot()).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_auth::{AuthProvider, Result as AuthResult, SocialAuthResult};
    use async_trait::async_trait;
    use mockall::mock;

    fn sample_user(uid: &str) -> AuthUser {
        AuthUser::new(uid, AuthProvider::Google).with_email("someone@example.com")
    }

    mock! {
        Social {}

        #[async_trait]
        impl SocialAuthService for Social {
            async fn sign_in_with_apple(&self) -> AuthResult<SocialAuthResult>;
            async fn sign_in_with_google(&self) -> AuthResult<SocialAuthResult>;
            async fn sign_in_with_facebook(&self) -> AuthResult<SocialAuthResult>;
        }
    }

    fn mock_store() -> Arc<AuthStore> {
        AuthStore::from_config(&AuthConfig::default())
    }

    fn failing_store() -> Arc<AuthStore> {
        let mut social = MockSocial::new();
        social
            .expect_sign_in_with_google()
            .returning(|| Err(AuthError::InvalidCredentials("Google sign-in failed".to_string())));
        social.expect_sign_in_with_facebook().returning(|| {
            Err(AuthError::InvalidCredentials("Facebook sign-in failed".to_string()))
        });
        AuthStore::new(Arc::new(social), app_auth::email_auth_service(&AuthConfig::default()))
    }

    #[test]
    fn test_default_state() {
        let state = AuthState::default();
        assert!(state.user.is_none());
        assert!(!state.is_authenticated);
        assert!(!state.is_loading);
        assert!(state.error.is_none());
        assert!(!state.onboarding_complete);
    }

    #[test]
    fn test_pending_sets_loading_and_clears_error() {
        let state = AuthState { error: Some("old".to_string()), ..AuthState::default() };
        let next = state.apply(AuthTransition::Pending);
        assert!(next.is_loading);
        assert!(next.error.is_none());
    }

    #[test]
    fn test_signed_in_completes_onboarding() {
        let next = AuthState::default()
            .apply(AuthTransition::Pending)
            .apply(AuthTransition::SignedIn(sample_user("u-1")));
        assert!(next.is_authenticated);
        assert!(!next.is_loading);
        assert!(next.onboarding_complete);
        assert_eq!(next.user.as_ref().map(|u| u.uid.as_str()), Some("u-1"));
    }

    #[test]
    fn test_signed_out_resets_session() {
        let signed_in = AuthState::default().apply(AuthTransition::SignedIn(sample_user("u-1")));
        let next = signed_in.apply(AuthTransition::SignedOut);
        assert!(next.user.is_none());
        assert!(!next.is_authenticated);
        assert!(!next.onboarding_complete);
        assert!(next.error.is_none());
    }

    #[test]
    fn test_rejected_preserves_existing_session() {
        let signed_in = AuthState::default().apply(AuthTransition::SignedIn(sample_user("u-1")));
        let next = signed_in
            .apply(AuthTransition::Pending)
            .apply(AuthTransition::Rejected("network down".to_string()));
        assert!(next.is_authenticated);
        assert_eq!(next.user.as_ref().map(|u| u.uid.as_str()), Some("u-1"));
        assert_eq!(next.error.as_deref(), Some("network down"));
        assert!(!next.is_loading);
    }

    #[test]
    fn test_invariant_holds_over_arbitrary_sequences() {
        let transitions = [
            AuthTransition::Pending,
            AuthTransition::SignedIn(sample_user("u-1")),
            AuthTransition::SetOnboardingComplete(false),
            AuthTransition::Rejected("boom".to_string()),
            AuthTransition::SetUser(None),
            AuthTransition::SetUser(Some(sample_user("u-2"))),
            AuthTransition::ClearError,
            AuthTransition::SignedOut,
            AuthTransition::SetError("later".to_string()),
        ];

        let mut state = AuthState::default();
        for transition in transitions {
            state = state.apply(transition);
            assert_eq!(state.is_authenticated, state.user.is_some());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_google_sign_in() {
        let store = mock_store();
        let user = store.sign_in_with_google().await.unwrap();

        assert_eq!(user.provider, AuthProvider::Google);
        let state = store.snapshot();
        assert!(state.is_authenticated);
        assert!(state.onboarding_complete);
        assert!(!state.is_loading);
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_loading_while_in_flight() {
        let store = mock_store();
        let flow = {
            let store = store.clone();
            tokio::spawn(async move { store.sign_in_with_apple().await })
        };
        tokio::task::yield_now().await;
        assert!(store.snapshot().is_loading);

        flow.await.unwrap().unwrap();
        assert!(!store.snapshot().is_loading);
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_rejection_records_message() {
        let store = failing_store();
        let err = store.sign_in_with_facebook().await.unwrap_err();
        assert_eq!(err.to_string(), "Facebook sign-in failed");

        let state = store.snapshot();
        assert_eq!(state.error.as_deref(), Some("Facebook sign-in failed"));
        assert!(!state.is_authenticated);
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_rejection_keeps_prior_user() {
        let store = failing_store();
        store.set_user(Some(sample_user("existing")));

        let _ = store.sign_in_with_google().await;
        let state = store.snapshot();
        assert!(state.is_authenticated);
        assert_eq!(state.user.as_ref().map(|u| u.uid.as_str()), Some("existing"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_sign_out_clears_everything() {
        let store = mock_store();
        store.sign_in_with_apple().await.unwrap();
        store.sign_out().await.unwrap();

        let state = store.snapshot();
        assert_eq!(state, AuthState::default());
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_email_sign_up_rejection() {
        let store = mock_store();
        let credentials = SignupCredentials {
            email: "bad".to_string(),
            password: "hunter22".to_string(),
            display_name: None,
            confirm_password: None,
        };

        assert!(store.sign_up_with_email(credentials).await.is_err());
        assert_eq!(store.snapshot().error.as_deref(), Some("Invalid email address"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscriber_observes_commits() {
        let store = mock_store();
        let mut rx = store.subscribe();
        assert!(!rx.borrow().is_authenticated);

        store.sign_in_with_google().await.unwrap();
        rx.changed().await.unwrap();
        assert!(rx.borrow().is_authenticated);
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_flows_last_writer_wins() {
        let store = mock_store();
        let (google, facebook) = tokio::join!(
            {
                let store = store.clone();
                async move { store.sign_in_with_google().await }
            },
            {
                let store = store.clone();
                async move { store.sign_in_with_facebook().await }
            }
        );
        google.unwrap();
        facebook.unwrap();

        // Both flows fulfilled; the final user is whichever committed last.
        let state = store.snapshot();
        assert!(state.is_authenticated);
        assert!(!state.is_loading);
    }

    #[test]
    fn test_clear_error_reducer() {
        let store = mock_store();
        store.set_error("something went wrong");
        assert!(store.snapshot().error.is_some());
        store.clear_error();
        assert!(store.snapshot().error.is_none());
    }
}
