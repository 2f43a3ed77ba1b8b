//! Store details screen

use crate::components::{Card, Chip, List, ListItem, ListSection};
use crate::navigation::StoreDetailsParams;

/// Store details
///
/// Renders whatever the navigation params carry; rows for missing optional
/// fields are simply omitted.
#[derive(Debug, Clone)]
pub struct StoreDetailsScreen {
    params: StoreDetailsParams,
}

impl StoreDetailsScreen {
    /// Create the screen from navigation params
    pub fn new(params: StoreDetailsParams) -> Self {
        Self { params }
    }

    /// Title bar text
    pub fn title(&self) -> &str {
        &self.params.name
    }

    /// Header card under the title bar
    pub fn header_card(&self) -> Card {
        let mut subtitle = self.params.floor.clone();
        if let Some(distance) = &self.params.distance {
            subtitle = format!("{} \u{2022} {} away", subtitle, distance);
        }
        let card = Card::new().with_title(&self.params.name).with_subtitle(subtitle);
        match &self.params.category {
            Some(category) => card.with_icon(category_icon(category)),
            None => card.with_icon("storefront"),
        }
    }

    /// Amenity chips
    pub fn amenity_chips(&self) -> Vec<Chip> {
        ["Click & collect", "Fitting rooms", "Wheelchair access"]
            .into_iter()
            .map(|label| Chip::new(label).outlined(true).compact(true))
            .collect()
    }

    /// Information rows
    pub fn info_list(&self) -> List {
        let mut section = ListSection::new("Store information")
            .with_item(ListItem::new("Floor").with_description(&self.params.floor));
        if let Some(category) = &self.params.category {
            section = section.with_item(ListItem::new("Category").with_description(category));
        }
        if let Some(distance) = &self.params.distance {
            section =
                section.with_item(ListItem::new("Walking distance").with_description(distance));
        }
        section = section.with_item(
            ListItem::new("Opening hours").with_description("9am\u{2013}9pm daily"),
        );
        List::new().with_section(section)
    }

    /// Current offers at this store
    pub fn offer_cards(&self) -> Vec<Card> {
        app_core::offers::seed_offers()
            .into_iter()
            .filter(|offer| offer.store == self.params.name)
            .map(|offer| {
                Card::new().with_title(offer.title).with_subtitle(offer.expires).with_icon("tag")
            })
            .collect()
    }
}

fn category_icon(category: &str) -> &'static str {
    match category.to_lowercase().as_str() {
        "fashion" => "hanger",
        "tech" => "laptop",
        "beauty" => "flower",
        "department" => "store",
        _ => "storefront",
    }
}
