//! Offers screen

use app_core::offers::{filter_offers, seed_offers, Offer, OfferCategory};

use crate::components::{Chip, List, ListItem, ListSection, ListState};

/// Offers list with category filter chips
#[derive(Debug, Clone)]
pub struct OffersScreen {
    offers: Vec<Offer>,
    selected: OfferCategory,
}

impl OffersScreen {
    /// Create the screen over the seed offers
    pub fn new() -> Self {
        Self { offers: seed_offers(), selected: OfferCategory::NearMe }
    }

    /// The active filter chip
    pub fn selected(&self) -> OfferCategory {
        self.selected
    }

    /// Select a filter chip
    pub fn select(&mut self, category: OfferCategory) {
        self.selected = category;
    }

    /// Filter chips in display order
    pub fn chips(&self) -> Vec<Chip> {
        OfferCategory::all()
            .into_iter()
            .map(|category| Chip::new(category.label()).selected(category == self.selected))
            .collect()
    }

    /// Offers matching the active chip
    pub fn visible(&self) -> Vec<&Offer> {
        filter_offers(&self.offers, self.selected)
    }

    /// The rendered list, with an empty state when the filter matches nothing
    pub fn list(&self) -> List {
        let visible = self.visible();
        if visible.is_empty() {
            return List::new()
                .with_state(ListState::Empty("No offers in this category right now".to_string()));
        }

        let mut section = ListSection::untitled();
        for offer in visible {
            section = section.with_item(
                ListItem::new(&offer.title)
                    .with_description(format!("{} \u{2022} {}", offer.store, offer.expires))
                    .with_leading_icon("tag"),
            );
        }
        List::new().with_section(section)
    }
}

impl Default for OffersScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_near_me_shows_all_offers() {
        let screen = OffersScreen::new();
        assert_eq!(screen.visible().len(), 3);
        assert_eq!(screen.list().len(), 3);
    }

    #[test]
    fn test_chip_selection_filters() {
        let mut screen = OffersScreen::new();
        screen.select(OfferCategory::Gifts);
        let visible = screen.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].store, "Lush");

        let chips = screen.chips();
        assert!(!chips[0].selected);
        assert!(chips[3].selected);
    }
}
