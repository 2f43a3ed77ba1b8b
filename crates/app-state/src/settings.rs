//! App preference toggles

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::watch;

/// The user-facing preference switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingsToggle {
    /// Share location for wayfinding
    LocationEnabled,
    /// Offer alerts for nearby stores
    OffersEnabled,
    /// Pause non-urgent notifications
    QuietModeEnabled,
    /// Prefer lifts and step-free routes
    AccessibleRoutes,
    /// Anonymous usage analytics
    AnalyticsEnabled,
}

/// Snapshot of the preference slice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsState {
    /// Share location for wayfinding
    pub location_enabled: bool,
    /// Offer alerts for nearby stores
    pub offers_enabled: bool,
    /// Pause non-urgent notifications
    pub quiet_mode_enabled: bool,
    /// Prefer lifts and step-free routes
    pub accessible_routes: bool,
    /// Anonymous usage analytics
    pub analytics_enabled: bool,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            location_enabled: true,
            offers_enabled: true,
            quiet_mode_enabled: false,
            accessible_routes: false,
            analytics_enabled: true,
        }
    }
}

impl SettingsState {
    /// Read a toggle
    pub fn get(&self, toggle: SettingsToggle) -> bool {
        match toggle {
            SettingsToggle::LocationEnabled => self.location_enabled,
            SettingsToggle::OffersEnabled => self.offers_enabled,
            SettingsToggle::QuietModeEnabled => self.quiet_mode_enabled,
            SettingsToggle::AccessibleRoutes => self.accessible_routes,
            SettingsToggle::AnalyticsEnabled => self.analytics_enabled,
        }
    }

    /// Return the state with a toggle flipped
    pub fn toggled(&self, toggle: SettingsToggle) -> SettingsState {
        let mut next = self.clone();
        match toggle {
            SettingsToggle::LocationEnabled => next.location_enabled = !next.location_enabled,
            SettingsToggle::OffersEnabled => next.offers_enabled = !next.offers_enabled,
            SettingsToggle::QuietModeEnabled => {
                next.quiet_mode_enabled = !next.quiet_mode_enabled
            }
            SettingsToggle::AccessibleRoutes => next.accessible_routes = !next.accessible_routes,
            SettingsToggle::AnalyticsEnabled => next.analytics_enabled = !next.analytics_enabled,
        }
        next
    }
}

/// Store driving the preference slice
pub struct SettingsStore {
    state: RwLock<SettingsState>,
    tx: watch::Sender<SettingsState>,
}

impl SettingsStore {
    /// Create a store with default preferences
    pub fn new() -> Arc<Self> {
        let state = SettingsState::default();
        let (tx, _rx) = watch::channel(state.clone());
        Arc::new(Self { state: RwLock::new(state), tx })
    }

    /// Current state snapshot
    pub fn snapshot(&self) -> SettingsState {
        self.state.read().clone()
    }

    /// Subscribe to committed states
    pub fn subscribe(&self) -> watch::Receiver<SettingsState> {
        self.tx.subscribe()
    }

    /// Flip a toggle and return the new value
    pub fn toggle(&self, toggle: SettingsToggle) -> bool {
        let mut guard = self.state.write();
        let next = guard.toggled(toggle);
        *guard = next.clone();
        drop(guard);
        tracing::debug!(?toggle, value = next.get(toggle), "preference toggled");
        self.tx.send_replace(next.clone());
        next.get(toggle)
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        let state = SettingsState::default();
        let (tx, _rx) = watch::channel(state.clone());
        Self { state: RwLock::new(state), tx }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = SettingsState::default();
        assert!(state.location_enabled);
        assert!(state.offers_enabled);
        assert!(!state.quiet_mode_enabled);
        assert!(!state.accessible_routes);
        assert!(state.analytics_enabled);
    }

    #[test]
    fn test_toggle_round_trip() {
        let store = SettingsStore::new();
        assert!(!store.toggle(SettingsToggle::LocationEnabled));
        assert!(store.toggle(SettingsToggle::LocationEnabled));
    }

    #[test]
    fn test_toggle_only_touches_its_field() {
        let store = SettingsStore::new();
        store.toggle(SettingsToggle::QuietModeEnabled);

        let state = store.snapshot();
        assert!(state.quiet_mode_enabled);
        assert_eq!(
            SettingsState { quiet_mode_enabled: true, ..SettingsState::default() },
            state
        );
    }

    #[tokio::test]
    async fn test_subscriber_sees_toggle() {
        let store = SettingsStore::new();
        let mut rx = store.subscribe();
        store.toggle(SettingsToggle::AnalyticsEnabled);
        rx.changed().await.unwrap();
        assert!(!rx.borrow().analytics_enabled);
    }
}
