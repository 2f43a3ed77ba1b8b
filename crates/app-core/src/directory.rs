//! Store directory and search
//!
//! The directory is a flat list of [`StoreRecord`]s filtered by a
//! case-insensitive substring match over name and category. Filtering is a
//! pure function of the query and the list: an empty query returns the list
//! unchanged, and re-applying the same query never narrows the result
//! further.

use serde::{Deserialize, Serialize};

/// A store in the centre
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreRecord {
    /// Stable store identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Category label shown in listings and matched by search
    pub category: String,
    /// Floor label, e.g. "Level 1"
    pub floor: String,
    /// Walking distance from the visitor, e.g. "4 min"
    pub distance: String,
}

impl StoreRecord {
    /// Create a store record
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        floor: impl Into<String>,
        distance: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            floor: floor.into(),
            distance: distance.into(),
        }
    }

    /// Whether this store matches a lowercased query fragment
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.category.to_lowercase().contains(needle)
    }
}

/// The stores shipped with the app
pub fn seed_stores() -> Vec<StoreRecord> {
    vec![
        StoreRecord::new("1", "Uniqlo", "Fashion", "Level 1", "4 min"),
        StoreRecord::new("2", "Apple Store", "Tech", "Level 2", "6 min"),
        StoreRecord::new("3", "Lush", "Beauty", "Level 1", "3 min"),
        StoreRecord::new("4", "Target", "Department", "Level 3", "8 min"),
    ]
}

/// Filter stores by a free-text query
///
/// Matches are case-insensitive substrings of the store name or category.
/// A query that is empty after trimming returns every store.
pub fn filter_stores<'a>(stores: &'a [StoreRecord], query: &str) -> Vec<&'a StoreRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return stores.iter().collect();
    }
    stores.iter().filter(|s| s.matches(&needle)).collect()
}

/// An owned directory with lookup by id
#[derive(Debug, Clone, Default)]
pub struct DirectoryIndex {
    stores: Vec<StoreRecord>,
}

impl DirectoryIndex {
    /// Build an index over the given stores
    pub fn new(stores: Vec<StoreRecord>) -> Self {
        Self { stores }
    }

    /// Build an index over the seed directory
    pub fn seeded() -> Self {
        Self::new(seed_stores())
    }

    /// All stores, in directory order
    pub fn all(&self) -> &[StoreRecord] {
        &self.stores
    }

    /// Look up a store by id
    pub fn get(&self, id: &str) -> Option<&StoreRecord> {
        self.stores.iter().find(|s| s.id == id)
    }

    /// Filter by a free-text query
    pub fn search(&self, query: &str) -> Vec<&StoreRecord> {
        filter_stores(&self.stores, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_returns_everything() {
        let stores = seed_stores();
        assert_eq!(filter_stores(&stores, "").len(), stores.len());
        assert_eq!(filter_stores(&stores, "   ").len(), stores.len());
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let stores = seed_stores();
        let by_name = filter_stores(&stores, "UNIQLO");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Uniqlo");
    }

    #[test]
    fn test_category_matches_too() {
        let stores = seed_stores();
        let hits = filter_stores(&stores, "tech");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Apple Store");
    }

    #[test]
    fn test_substring_match() {
        let stores = seed_stores();
        let hits = filter_stores(&stores, "app");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Apple Store");
    }

    #[test]
    fn test_no_match_is_empty() {
        let stores = seed_stores();
        assert!(filter_stores(&stores, "bookshop").is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let stores = seed_stores();
        let once: Vec<StoreRecord> =
            filter_stores(&stores, "fashion").into_iter().cloned().collect();
        assert!(!once.is_empty());
        let twice: Vec<StoreRecord> =
            filter_stores(&once, "fashion").into_iter().cloned().collect();
        assert_eq!(twice, once);
    }

    #[test]
    fn test_index_lookup() {
        let index = DirectoryIndex::seeded();
        assert_eq!(index.get("3").map(|s| s.name.as_str()), Some("Lush"));
        assert!(index.get("99").is_none());
    }
}
