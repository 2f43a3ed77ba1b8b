//! End-to-end authentication flow tests
//!
//! Drives the auth store through the mock providers exactly the way the
//! screens do and checks the state the UI would observe at each point.

use std::time::Duration;

use app_auth::{AuthConfig, AuthMode, AuthProvider, SignupCredentials};
use app_state::{AuthState, AuthStore};

fn store() -> std::sync::Arc<AuthStore> {
    AuthStore::from_config(&AuthConfig::default())
}

#[tokio::test(start_paused = true)]
async fn apple_sign_in_reaches_authenticated_state() {
    let store = store();
    let user = store.sign_in_with_apple().await.unwrap();

    assert_eq!(user.provider, AuthProvider::Apple);
    assert_eq!(user.uid, "mock-apple-id");

    let state = store.snapshot();
    assert!(state.is_authenticated);
    assert!(state.onboarding_complete);
    assert!(!state.is_loading);
    assert!(state.error.is_none());
}

#[tokio::test(start_paused = true)]
async fn authenticated_flag_always_tracks_user() {
    let store = store();

    store.sign_in_with_google().await.unwrap();
    let state = store.snapshot();
    assert_eq!(state.is_authenticated, state.user.is_some());

    store.sign_out().await.unwrap();
    let state = store.snapshot();
    assert_eq!(state.is_authenticated, state.user.is_some());
    assert!(!state.is_authenticated);
}

#[tokio::test(start_paused = true)]
async fn sign_out_resets_to_default() {
    let store = store();
    store.sign_in_with_facebook().await.unwrap();
    store.set_error("stale message");

    store.sign_out().await.unwrap();
    assert_eq!(store.snapshot(), AuthState::default());
}

#[tokio::test(start_paused = true)]
async fn failed_email_sign_up_keeps_visitor_signed_out() {
    let store = store();
    let err = store
        .sign_up_with_email(SignupCredentials {
            email: "visitor@example".to_string(),
            password: "hunter22".to_string(),
            display_name: None,
            confirm_password: None,
        })
        .await
        .unwrap_err();

    let state = store.snapshot();
    assert!(!state.is_authenticated);
    assert!(state.user.is_none());
    assert_eq!(state.error.as_deref(), Some(err.to_string().as_str()));
    assert!(!state.is_loading);
}

#[tokio::test(start_paused = true)]
async fn overlapping_sign_ins_settle_without_loading() {
    let store = store();

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

    let state = store.snapshot();
    assert!(state.is_authenticated);
    assert!(!state.is_loading);
    assert!(state.error.is_none());
    // One of the two providers owns the final record.
    let provider = state.user.unwrap().provider;
    assert!(matches!(provider, AuthProvider::Google | AuthProvider::Facebook));
}

#[tokio::test(start_paused = true)]
async fn subscriber_sees_pending_then_fulfilled() {
    let store = store();
    let mut rx = store.subscribe();

    let flow = {
        let store = store.clone();
        tokio::spawn(async move { store.sign_in_with_apple().await })
    };

    rx.changed().await.unwrap();
    assert!(rx.borrow().is_loading);

    flow.await.unwrap().unwrap();
    rx.changed().await.unwrap();
    assert!(rx.borrow().is_authenticated);
}

#[tokio::test(start_paused = true)]
async fn mock_latency_is_configurable() {
    let config = AuthConfig { mode: AuthMode::Mock, latency: Duration::from_millis(10) };
    let store = AuthStore::from_config(&config);

    let start = tokio::time::Instant::now();
    store.sign_in_with_google().await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(10));
    assert!(start.elapsed() < Duration::from_millis(500));
}
