//! Store directory screen with search

use app_core::directory::{DirectoryIndex, StoreRecord};

use crate::components::{Input, InputType, List, ListItem, ListSection, ListState};
use crate::navigation::{Route, StoreDetailsParams};

/// Searchable store directory
#[derive(Debug)]
pub struct DirectoryScreen {
    index: DirectoryIndex,
    query: String,
}

impl DirectoryScreen {
    /// Create the screen over the seed directory
    pub fn new() -> Self {
        Self::with_index(DirectoryIndex::seeded())
    }

    /// Create the screen over a custom directory
    pub fn with_index(index: DirectoryIndex) -> Self {
        Self { index, query: String::new() }
    }

    /// Create the screen with an initial query, e.g. from a deep link
    pub fn with_query(query: impl Into<String>) -> Self {
        Self { index: DirectoryIndex::seeded(), query: query.into() }
    }

    /// The current query
    pub fn query(&self) -> &str {
        &self.query
    }

    /// A keystroke in the search field
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// The search field
    pub fn search_input(&self) -> Input {
        let mut input = Input::new("Search stores")
            .with_type(InputType::Search)
            .with_placeholder("Store or category")
            .with_leading_icon("magnify");
        input.value = self.query.clone();
        input
    }

    /// Stores matching the query
    pub fn results(&self) -> Vec<&StoreRecord> {
        self.index.search(&self.query)
    }

    /// Route for tapping a result
    pub fn open_store(&self, store: &StoreRecord) -> Route {
        Route::StoreDetails(StoreDetailsParams::from(store))
    }

    /// The rendered results list
    pub fn list(&self) -> List {
        let results = self.results();
        if results.is_empty() {
            return List::new().with_state(ListState::Empty(format!(
                "No stores match \"{}\"",
                self.query.trim()
            )));
        }

        let mut section = ListSection::untitled();
        for store in results {
            section = section.with_item(
                ListItem::new(&store.name)
                    .with_description(format!(
                        "{} \u{2022} {} \u{2022} {}",
                        store.category, store.floor, store.distance
                    ))
                    .with_leading_icon("storefront")
                    .with_trailing_icon("chevron-right")
                    .on_press(self.open_store(store).to_path()),
            );
        }
        List::new().with_section(section)
    }
}

impl Default for DirectoryScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_lists_everything() {
        let screen = DirectoryScreen::new();
        assert_eq!(screen.results().len(), 4);
        assert_eq!(screen.list().len(), 4);
    }

    #[test]
    fn test_query_narrows_results() {
        let mut screen = DirectoryScreen::new();
        screen.set_query("beauty");
        let results = screen.results();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Lush");
    }

    #[test]
    fn test_no_match_shows_empty_state() {
        let mut screen = DirectoryScreen::new();
        screen.set_query("bookshop");
        match screen.list().state {
            ListState::Empty(message) => assert!(message.contains("bookshop")),
            other => panic!("unexpected state: {:?}", other),
        }
    }

    #[test]
    fn test_result_opens_store_details() {
        let screen = DirectoryScreen::new();
        let store = screen.results()[1];
        match screen.open_store(store) {
            Route::StoreDetails(params) => {
                assert_eq!(params.name, "Apple Store");
                assert_eq!(params.floor, "Level 2");
                assert_eq!(params.category.as_deref(), Some("Tech"));
                assert_eq!(params.distance.as_deref(), Some("6 min"));
            }
            other => panic!("unexpected route: {:?}", other),
        }
    }

    #[test]
    fn test_deep_link_query_prefills_search() {
        let screen = DirectoryScreen::with_query("tech");
        assert_eq!(screen.search_input().value, "tech");
        assert_eq!(screen.results().len(), 1);
    }
}
