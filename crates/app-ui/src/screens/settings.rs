//! Settings screen

use app_state::{AuthState, SettingsState, SettingsToggle};

use crate::components::{Avatar, Button, ButtonMode, Card, List, ListItem, ListSection};

/// Settings screen with preference toggles and the account row
#[derive(Debug, Clone, Default)]
pub struct SettingsScreen;

impl SettingsScreen {
    /// Create the screen
    pub fn new() -> Self {
        Self
    }

    /// The toggles in display order, with their row copy
    pub fn toggle_rows(&self) -> [(SettingsToggle, &'static str, &'static str); 5] {
        [
            (SettingsToggle::LocationEnabled, "Location", "Share location for wayfinding"),
            (SettingsToggle::OffersEnabled, "Offer alerts", "Hear about offers near you"),
            (SettingsToggle::QuietModeEnabled, "Quiet mode", "Pause non-urgent notifications"),
            (SettingsToggle::AccessibleRoutes, "Accessible routes", "Prefer lifts and step-free paths"),
            (SettingsToggle::AnalyticsEnabled, "Analytics", "Share anonymous usage data"),
        ]
    }

    /// The preferences list
    pub fn preferences_list(&self, settings: &SettingsState) -> List {
        let mut section = ListSection::new("Preferences");
        for (toggle, title, description) in self.toggle_rows() {
            let icon = if settings.get(toggle) { "toggle-switch" } else { "toggle-switch-off" };
            section = section.with_item(
                ListItem::new(title)
                    .with_description(description)
                    .with_trailing_icon(icon),
            );
        }
        List::new().with_section(section)
    }

    /// Account card: avatar and sign-out when signed in, sign-in otherwise
    pub fn account_card(&self, auth: &AuthState) -> Card {
        match &auth.user {
            Some(user) => {
                let name = user.display_name.clone().unwrap_or_else(|| user.uid.clone());
                Card::new()
                    .with_title(name)
                    .with_subtitle(user.email.clone().unwrap_or_default())
                    .with_icon("account-circle")
            }
            None => Card::new()
                .with_title("Sign in")
                .with_subtitle("Sync your trips and offers across devices"),
        }
    }

    /// Avatar shown on the account card when signed in
    pub fn account_avatar(&self, auth: &AuthState) -> Option<Avatar> {
        auth.user.as_ref().map(|user| {
            let name = user.display_name.clone().unwrap_or_else(|| user.uid.clone());
            match &user.photo_url {
                Some(url) => Avatar::new(name).with_photo(url),
                None => Avatar::new(name),
            }
        })
    }

    /// The primary account action
    pub fn account_button(&self, auth: &AuthState) -> Button {
        if auth.is_authenticated {
            Button::new("Sign out").with_mode(ButtonMode::Outlined).with_icon("logout")
        } else {
            Button::new("Sign in").with_mode(ButtonMode::Contained).with_icon("login")
        }
        .loading(auth.is_loading)
    }

    /// Footer version line
    pub fn version_label(&self) -> String {
        format!("{} v{}", app_core::APP_NAME, app_core::APP_VERSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_state::{AuthProvider, AuthUser};

    fn signed_in() -> AuthState {
        let mut user = AuthUser::new("u-1", AuthProvider::Apple);
        user.display_name = Some("Sam".to_string());
        user.email = Some("sam@example.com".to_string());
        AuthState { user: Some(user), is_authenticated: true, ..AuthState::default() }
    }

    #[test]
    fn test_five_preference_rows() {
        let screen = SettingsScreen::new();
        let list = screen.preferences_list(&SettingsState::default());
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn test_rows_reflect_toggle_state() {
        let screen = SettingsScreen::new();
        let settings = SettingsState::default().toggled(SettingsToggle::QuietModeEnabled);
        let list = screen.preferences_list(&settings);
        let quiet = &list.sections[0].items[2];
        assert_eq!(quiet.trailing_icon.as_deref(), Some("toggle-switch"));
    }

    #[test]
    fn test_account_card_signed_out() {
        let screen = SettingsScreen::new();
        let card = screen.account_card(&AuthState::default());
        assert_eq!(card.title.as_deref(), Some("Sign in"));
        assert!(screen.account_avatar(&AuthState::default()).is_none());
        assert_eq!(screen.account_button(&AuthState::default()).label, "Sign in");
    }

    #[test]
    fn test_account_card_signed_in() {
        let screen = SettingsScreen::new();
        let auth = signed_in();
        let card = screen.account_card(&auth);
        assert_eq!(card.title.as_deref(), Some("Sam"));
        assert_eq!(screen.account_avatar(&auth).unwrap().initials(), "S");
        assert_eq!(screen.account_button(&auth).label, "Sign out");
    }

    #[test]
    fn test_button_spins_while_loading() {
        let screen = SettingsScreen::new();
        let auth = AuthState { is_loading: true, ..AuthState::default() };
        assert!(screen.account_button(&auth).loading);
    }

    #[test]
    fn test_version_label() {
        assert_eq!(SettingsScreen::new().version_label(), "CentreGuide v1.0.0");
    }
}
