//! Notification inbox screen

use app_core::notifications::{Inbox, NotificationKind};

use crate::components::{List, ListItem, ListSection, ListState};

/// Notification inbox
#[derive(Debug, Clone)]
pub struct NotificationsScreen {
    inbox: Inbox,
}

impl NotificationsScreen {
    /// Create the screen over the seed inbox
    pub fn new() -> Self {
        Self::with_inbox(Inbox::seeded())
    }

    /// Create the screen over a custom inbox
    pub fn with_inbox(inbox: Inbox) -> Self {
        Self { inbox }
    }

    /// Unread count for the bell badge
    pub fn unread_count(&self) -> usize {
        self.inbox.unread_count()
    }

    /// Open an entry, marking it read
    pub fn open(&mut self, id: &str) -> bool {
        self.inbox.mark_read(id)
    }

    /// Clear the whole inbox
    pub fn mark_all_read(&mut self) {
        self.inbox.mark_all_read();
    }

    /// The rendered inbox
    pub fn list(&self) -> List {
        if self.inbox.entries().is_empty() {
            return List::new()
                .with_state(ListState::Empty("You're all caught up".to_string()));
        }

        let mut section = ListSection::untitled();
        for entry in self.inbox.entries() {
            let icon = match entry.kind {
                NotificationKind::Offer => "tag",
                NotificationKind::Announcement => "bullhorn",
                NotificationKind::Trip => "walk",
            };
            let mut item = ListItem::new(&entry.title)
                .with_description(&entry.body)
                .with_leading_icon(icon)
                .on_press(format!("open:{}", entry.id));
            if !entry.read {
                item = item.with_trailing_icon("circle-small");
            }
            section = section.with_item(item);
        }
        List::new().with_section(section)
    }
}

impl Default for NotificationsScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unread_markers() {
        let mut screen = NotificationsScreen::new();
        assert_eq!(screen.unread_count(), 3);

        assert!(screen.open("1"));
        assert_eq!(screen.unread_count(), 2);

        let list = screen.list();
        let items = &list.sections[0].items;
        assert!(items[0].trailing_icon.is_none());
        assert!(items[1].trailing_icon.is_some());
    }

    #[test]
    fn test_empty_inbox_state() {
        let screen = NotificationsScreen::with_inbox(Inbox::default());
        assert!(matches!(screen.list().state, ListState::Empty(_)));
    }

    #[test]
    fn test_mark_all_read() {
        let mut screen = NotificationsScreen::new();
        screen.mark_all_read();
        assert_eq!(screen.unread_count(), 0);
    }
}
