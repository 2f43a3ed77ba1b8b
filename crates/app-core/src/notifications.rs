//! Centre notifications
//!
//! A small in-memory inbox of centre announcements and offer alerts with an
//! unread count, backing the notifications screen and the bell badge.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What kind of announcement a notification is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// A store promotion
    Offer,
    /// A centre-wide announcement
    Announcement,
    /// An update about the visitor's planned trip
    Trip,
}

/// One inbox entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Stable notification identifier
    pub id: String,
    /// Headline
    pub title: String,
    /// Body text
    pub body: String,
    /// Announcement kind
    pub kind: NotificationKind,
    /// When the notification was issued
    pub issued_at: DateTime<Utc>,
    /// Whether the visitor has opened it
    pub read: bool,
}

impl Notification {
    /// Create an unread notification issued now
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
        kind: NotificationKind,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
            kind,
            issued_at: Utc::now(),
            read: false,
        }
    }
}

/// The visitor's inbox, newest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inbox {
    entries: Vec<Notification>,
}

impl Inbox {
    /// Create an inbox over the given entries
    pub fn new(entries: Vec<Notification>) -> Self {
        Self { entries }
    }

    /// The inbox shipped with the app
    pub fn seeded() -> Self {
        Self::new(vec![
            Notification::new(
                "1",
                "Flash sale at Uniqlo",
                "20% off knitwear until Sunday on Level 1.",
                NotificationKind::Offer,
            ),
            Notification::new(
                "2",
                "Parking update",
                "Level B2 is closed for cleaning until 2pm.",
                NotificationKind::Announcement,
            ),
            Notification::new(
                "3",
                "Trip reminder",
                "Your planned route has 3 stops today.",
                NotificationKind::Trip,
            ),
        ])
    }

    /// Entries in display order
    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    /// Number of unread entries
    pub fn unread_count(&self) -> usize {
        self.entries.iter().filter(|n| !n.read).count()
    }

    /// Mark one entry read; returns false when the id is unknown
    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.entries.iter_mut().find(|n| n.id == id) {
            Some(entry) => {
                entry.read = true;
                true
            }
            None => false,
        }
    }

    /// Mark everything read
    pub fn mark_all_read(&mut self) {
        for entry in &mut self.entries {
            entry.read = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_inbox_is_unread() {
        let inbox = Inbox::seeded();
        assert_eq!(inbox.unread_count(), inbox.entries().len());
    }

    #[test]
    fn test_mark_read() {
        let mut inbox = Inbox::seeded();
        assert!(inbox.mark_read("1"));
        assert_eq!(inbox.unread_count(), 2);
        assert!(!inbox.mark_read("missing"));
    }

    #[test]
    fn test_mark_all_read() {
        let mut inbox = Inbox::seeded();
        inbox.mark_all_read();
        assert_eq!(inbox.unread_count(), 0);
    }
}
