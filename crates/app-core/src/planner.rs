//! Trip planner checklist and route summary

use serde::{Deserialize, Serialize};

/// One errand on the visitor's checklist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripItem {
    /// Stable item identifier
    pub id: String,
    /// What the visitor wants to do, e.g. "Pick up running shoes"
    pub label: String,
    /// The store the errand happens at
    pub store: String,
    /// Whether the errand is checked off
    pub ready: bool,
}

impl TripItem {
    /// Create an unchecked item
    pub fn new(id: impl Into<String>, label: impl Into<String>, store: impl Into<String>) -> Self {
        Self { id: id.into(), label: label.into(), store: store.into(), ready: false }
    }
}

/// Summary line for the suggested route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSummary {
    /// Number of stops on the route
    pub stops: usize,
    /// Total walking time in minutes
    pub walk_minutes: u32,
}

impl RouteSummary {
    /// Render as shown on the planner screen, e.g. "3 stops • 14 min walk"
    pub fn label(&self) -> String {
        format!("{} stops \u{2022} {} min walk", self.stops, self.walk_minutes)
    }
}

/// The visitor's plan for this trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripPlan {
    items: Vec<TripItem>,
    /// Walking summary for the suggested route
    pub route: RouteSummary,
}

impl TripPlan {
    /// Create a plan
    pub fn new(items: Vec<TripItem>, route: RouteSummary) -> Self {
        Self { items, route }
    }

    /// The plan shipped with the app
    pub fn seeded() -> Self {
        Self::new(
            vec![
                TripItem::new("1", "Pick up running shoes", "Uniqlo"),
                TripItem::new("2", "Find a birthday gift", "Lush"),
                TripItem::new("3", "Grab groceries", "Target"),
            ],
            RouteSummary { stops: 3, walk_minutes: 14 },
        )
    }

    /// Items in checklist order
    pub fn items(&self) -> &[TripItem] {
        &self.items
    }

    /// Flip an item's checked state; returns false when the id is unknown
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.ready = !item.ready;
                true
            }
            None => false,
        }
    }

    /// Number of checked-off items
    pub fn ready_count(&self) -> usize {
        self.items.iter().filter(|i| i.ready).count()
    }
}
