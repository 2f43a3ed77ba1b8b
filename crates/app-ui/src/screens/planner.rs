//! Trip planner screen

use app_core::planner::TripPlan;

use crate::components::{Card, List, ListItem, ListSection};

/// Trip planner with a checklist and a route summary
#[derive(Debug, Clone)]
pub struct PlannerScreen {
    plan: TripPlan,
}

impl PlannerScreen {
    /// Create the screen over the seed plan
    pub fn new() -> Self {
        Self { plan: TripPlan::seeded() }
    }

    /// The underlying plan
    pub fn plan(&self) -> &TripPlan {
        &self.plan
    }

    /// Check an item off, or uncheck it
    pub fn toggle_item(&mut self, id: &str) -> bool {
        self.plan.toggle(id)
    }

    /// Progress line, e.g. "1 of 3 ready"
    pub fn progress_label(&self) -> String {
        format!("{} of {} ready", self.plan.ready_count(), self.plan.items().len())
    }

    /// Route summary card
    pub fn route_card(&self) -> Card {
        Card::new()
            .with_title("Suggested route")
            .with_subtitle(self.plan.route.label())
            .with_icon("walk")
    }

    /// The checklist
    pub fn checklist(&self) -> List {
        let mut section = ListSection::new("Today's errands");
        for item in self.plan.items() {
            let icon = if item.ready { "check-circle" } else { "circle-outline" };
            section = section.with_item(
                ListItem::new(&item.label)
                    .with_description(&item.store)
                    .with_leading_icon(icon)
                    .on_press(format!("toggle:{}", item.id)),
            );
        }
        List::new().with_section(section)
    }
}

impl Default for PlannerScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_label_tracks_toggles() {
        let mut screen = PlannerScreen::new();
        assert_eq!(screen.progress_label(), "0 of 3 ready");
        screen.toggle_item("1");
        assert_eq!(screen.progress_label(), "1 of 3 ready");
    }

    #[test]
    fn test_route_card_summary() {
        let screen = PlannerScreen::new();
        assert_eq!(screen.route_card().subtitle.as_deref(), Some("3 stops \u{2022} 14 min walk"));
    }

    #[test]
    fn test_checklist_marks_ready_items() {
        let mut screen = PlannerScreen::new();
        screen.toggle_item("2");
        let list = screen.checklist();
        let items = &list.sections[0].items;
        assert_eq!(items[1].leading_icon.as_deref(), Some("check-circle"));
        assert_eq!(items[0].leading_icon.as_deref(), Some("circle-outline"));
    }
}
