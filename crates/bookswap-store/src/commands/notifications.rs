//! # Notification Commands

use tracing::debug;

use super::absorb;
use crate::state::DomainStore;

/// Marks one notification as read. Idempotent; unknown ids are ignored.
pub fn mark_notification_read(store: &DomainStore, notification_id: &str) {
    debug!(notification_id = %notification_id, "mark_notification_read command");
    absorb(
        "mark_notification_read",
        store.mark_notification_read(notification_id),
    );
}

/// "Mark all as read" from the bell dropdown.
///
/// Not a store primitive: it marks each unread notification one at a time.
pub fn mark_all_notifications_read(store: &DomainStore) {
    debug!("mark_all_notifications_read command");
    for notification in store.notifications().iter().filter(|n| !n.read) {
        mark_notification_read(store, &notification.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StoreConfig;

    #[test]
    fn test_mark_notification_read_unknown_id() {
        let store = DomainStore::new(StoreConfig::instant());
        let before = store.notifications();
        mark_notification_read(&store, "notif-404");
        assert_eq!(store.notifications(), before);
    }

    #[test]
    fn test_mark_all_notifications_read() {
        let store = DomainStore::new(StoreConfig::instant());
        assert_eq!(store.unread_notification_count(), 2);

        mark_all_notifications_read(&store);

        assert_eq!(store.unread_notification_count(), 0);
        assert_eq!(store.notifications().len(), 4);
    }
}
