//! Home dashboard screen

use app_core::directory::{seed_stores, StoreRecord};
use app_core::offers::{seed_offers, Offer};
use app_state::AuthState;

use crate::components::{Badge, Card};
use crate::navigation::{Route, StoreDetailsParams};

/// Home dashboard
///
/// Greets the visitor, surfaces popular stops and nearby offers, and links
/// into the directory and the notification inbox.
#[derive(Debug, Clone)]
pub struct HomeScreen {
    stores: Vec<StoreRecord>,
    offers: Vec<Offer>,
}

impl HomeScreen {
    /// Create the screen over the seed data
    pub fn new() -> Self {
        Self { stores: seed_stores(), offers: seed_offers() }
    }

    /// Greeting line, personalised when signed in
    pub fn greeting(&self, auth: &AuthState) -> String {
        match auth.user.as_ref().and_then(|u| u.display_name.clone()) {
            Some(name) => format!("Welcome back, {}", name),
            None => format!("Welcome to {}", app_core::APP_NAME),
        }
    }

    /// Bell badge for the title bar
    pub fn notification_badge(&self, unread: usize) -> Option<Badge> {
        Badge::notifications(unread)
    }

    /// Route for the bell
    pub fn open_notifications(&self) -> Route {
        Route::Notifications
    }

    /// Route for the search bar
    pub fn open_directory(&self) -> Route {
        Route::Directory { q: None }
    }

    /// Popular stops carousel
    pub fn popular_stops(&self) -> Vec<Card> {
        self.stores
            .iter()
            .map(|store| {
                Card::new()
                    .with_title(&store.name)
                    .with_subtitle(format!("{} \u{2022} {}", store.floor, store.distance))
                    .with_icon("storefront")
                    .on_press(Route::StoreDetails(StoreDetailsParams::from(store)).to_path())
            })
            .collect()
    }

    /// Nearby offers strip; the full list lives on the offers tab
    pub fn nearby_offers(&self) -> Vec<Card> {
        self.offers
            .iter()
            .take(2)
            .map(|offer| {
                Card::new()
                    .with_title(&offer.title)
                    .with_subtitle(format!("{} \u{2022} {}", offer.store, offer.expires))
                    .with_icon("tag")
            })
            .collect()
    }
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_state::{AuthProvider, AuthUser};

    #[test]
    fn test_greeting_personalised_when_signed_in() {
        let screen = HomeScreen::new();
        assert_eq!(screen.greeting(&AuthState::default()), "Welcome to CentreGuide");

        let mut user = AuthUser::new("u-1", AuthProvider::Google);
        user.display_name = Some("Sam".to_string());
        let auth = AuthState { user: Some(user), is_authenticated: true, ..AuthState::default() };
        assert_eq!(screen.greeting(&auth), "Welcome back, Sam");
    }

    #[test]
    fn test_popular_stops_link_to_details() {
        let screen = HomeScreen::new();
        let stops = screen.popular_stops();
        assert_eq!(stops.len(), 4);
        assert!(stops[0].on_press.as_deref().unwrap().starts_with("/store/"));
    }

    #[test]
    fn test_nearby_offers_is_a_teaser() {
        let screen = HomeScreen::new();
        assert_eq!(screen.nearby_offers().len(), 2);
    }

    #[test]
    fn test_badge_hidden_when_inbox_clear() {
        let screen = HomeScreen::new();
        assert!(screen.notification_badge(0).is_none());
        assert!(screen.notification_badge(3).is_some());
    }
}
