//! Offers and promotions

use serde::{Deserialize, Serialize};

/// Filter chips shown above the offers list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferCategory {
    /// Sorted by walking distance
    NearMe,
    /// Clothing and accessories
    Fashion,
    /// Dining and takeaway
    Food,
    /// Gifting ideas
    Gifts,
}

impl OfferCategory {
    /// Chip label
    pub fn label(&self) -> &'static str {
        match self {
            OfferCategory::NearMe => "Near me",
            OfferCategory::Fashion => "Fashion",
            OfferCategory::Food => "Food",
            OfferCategory::Gifts => "Gifts",
        }
    }

    /// All chips in display order
    pub fn all() -> [OfferCategory; 4] {
        [
            OfferCategory::NearMe,
            OfferCategory::Fashion,
            OfferCategory::Food,
            OfferCategory::Gifts,
        ]
    }
}

/// A promotion running at a store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    /// Stable offer identifier
    pub id: String,
    /// Headline, e.g. "20% off knitwear"
    pub title: String,
    /// Store running the offer
    pub store: String,
    /// Expiry label, e.g. "Ends Sunday"
    pub expires: String,
    /// Category used by the filter chips
    pub category: OfferCategory,
}

impl Offer {
    /// Create an offer
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        store: impl Into<String>,
        expires: impl Into<String>,
        category: OfferCategory,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            store: store.into(),
            expires: expires.into(),
            category,
        }
    }
}

/// The offers shipped with the app
pub fn seed_offers() -> Vec<Offer> {
    vec![
        Offer::new("1", "20% off knitwear", "Uniqlo", "Ends Sunday", OfferCategory::Fashion),
        Offer::new("2", "Free drink with any pastry", "Grind Coffee", "Today only", OfferCategory::Food),
        Offer::new("3", "Gift wrapping included", "Lush", "This week", OfferCategory::Gifts),
    ]
}

/// Offers in a category, or all offers for [`OfferCategory::NearMe`]
pub fn filter_offers(offers: &[Offer], category: OfferCategory) -> Vec<&Offer> {
    match category {
        OfferCategory::NearMe => offers.iter().collect(),
        other => offers.iter().filter(|o| o.category == other).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_near_me_keeps_everything() {
        let offers = seed_offers();
        assert_eq!(filter_offers(&offers, OfferCategory::NearMe).len(), offers.len());
    }

    #[test]
    fn test_category_filter() {
        let offers = seed_offers();
        let food = filter_offers(&offers, OfferCategory::Food);
        assert_eq!(food.len(), 1);
        assert_eq!(food[0].store, "Grind Coffee");
    }

    #[test]
    fn test_chip_labels() {
        assert_eq!(OfferCategory::NearMe.label(), "Near me");
        assert_eq!(OfferCategory::all().len(), 4);
    }
}
