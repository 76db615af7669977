//! # Collections
//!
//! The five entity collections and the primitive edits allowed on them.
//!
//! ## Collection Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Collection          Insert            Update             Delete        │
//! │  ──────────          ──────            ──────             ──────        │
//! │  messages            append            -                  never         │
//! │  listed_books        append            -                  never         │
//! │  borrowed_books      append            -                  by book_id    │
//! │  incoming_requests   (seed only)       status             never         │
//! │  outgoing_requests   append            -                  never         │
//! │  notifications       prepend           read flag          never         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is deterministic: ids and timestamps arrive as arguments.
//! Generating them is `DomainStore`'s job.

use bookswap_core::{
    BookListing, BorrowRequest, Fixtures, Message, Notification, RequestStatus,
};
use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collections {
    pub messages: Vec<Message>,
    /// Owned by the current user.
    pub listed_books: Vec<BookListing>,
    /// Held by the current user as borrower.
    pub borrowed_books: Vec<BookListing>,
    /// Requests addressed to the current user as owner.
    pub incoming_requests: Vec<BorrowRequest>,
    /// Requests the current user sent.
    pub outgoing_requests: Vec<BorrowRequest>,
    /// Newest first.
    pub notifications: Vec<Notification>,
}

impl From<Fixtures> for Collections {
    fn from(fixtures: Fixtures) -> Self {
        Collections {
            messages: fixtures.messages,
            listed_books: fixtures.listed_books,
            borrowed_books: fixtures.borrowed_books,
            incoming_requests: fixtures.incoming_requests,
            outgoing_requests: fixtures.outgoing_requests,
            notifications: fixtures.notifications,
        }
    }
}

impl Collections {
    pub fn push_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn push_listed(&mut self, listing: BookListing) {
        self.listed_books.push(listing);
    }

    pub fn push_borrowed(&mut self, listing: BookListing) {
        self.borrowed_books.push(listing);
    }

    pub fn push_outgoing(&mut self, request: BorrowRequest) {
        self.outgoing_requests.push(request);
    }

    /// New notifications go to the front.
    pub fn prepend_notification(&mut self, notification: Notification) {
        self.notifications.insert(0, notification);
    }

    /// Sets the status of an incoming request, whatever it was before.
    ///
    /// Re-approving, or rejecting an approved request, is allowed: the last
    /// write wins.
    pub fn set_incoming_status(
        &mut self,
        request_id: &str,
        status: RequestStatus,
    ) -> StoreResult<&BorrowRequest> {
        let request = self
            .incoming_requests
            .iter_mut()
            .find(|r| r.id == request_id)
            .ok_or_else(|| StoreError::not_found("BorrowRequest", request_id))?;
        request.status = status;
        Ok(request)
    }

    /// Idempotent.
    pub fn mark_notification_read(&mut self, notification_id: &str) -> StoreResult<()> {
        let notification = self
            .notifications
            .iter_mut()
            .find(|n| n.id == notification_id)
            .ok_or_else(|| StoreError::not_found("Notification", notification_id))?;
        notification.read = true;
        Ok(())
    }

    /// Removes every borrowed entry for `book_id`, returning how many went.
    pub fn remove_borrowed(&mut self, book_id: &str) -> usize {
        let before = self.borrowed_books.len();
        self.borrowed_books.retain(|l| l.book_id != book_id);
        before - self.borrowed_books.len()
    }

    pub fn pending_incoming_count(&self) -> usize {
        self.incoming_requests.iter().filter(|r| r.is_pending()).count()
    }

    pub fn unread_notification_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookswap_core::{ListingStatus, NotificationKind};
    use chrono::Utc;

    fn seeded() -> Collections {
        Collections::from(Fixtures::now())
    }

    fn borrowed(id: &str, book_id: &str) -> BookListing {
        BookListing {
            id: id.to_string(),
            book_id: book_id.to_string(),
            owner_id: "maya-user".to_string(),
            status: ListingStatus::Reserved,
            condition: "Good".to_string(),
            distance: "0.8 mi".to_string(),
        }
    }

    #[test]
    fn test_set_incoming_status_last_write_wins() {
        let mut collections = seeded();

        collections
            .set_incoming_status("req-1", RequestStatus::Approved)
            .unwrap();
        let request = collections
            .set_incoming_status("req-1", RequestStatus::Rejected)
            .unwrap();

        assert_eq!(request.status, RequestStatus::Rejected);
        assert_eq!(collections.pending_incoming_count(), 1);
    }

    #[test]
    fn test_set_incoming_status_ignores_outgoing_ids() {
        let mut collections = seeded();
        let err = collections
            .set_incoming_status("req-out-2", RequestStatus::Approved)
            .unwrap_err();
        assert_eq!(err, StoreError::not_found("BorrowRequest", "req-out-2"));
        assert_eq!(collections.outgoing_requests[1].status, RequestStatus::Pending);
    }

    #[test]
    fn test_prepend_notification() {
        let mut collections = seeded();
        collections.prepend_notification(Notification::new(
            "n-new",
            NotificationKind::Message,
            "t",
            "m",
            Utc::now(),
        ));
        assert_eq!(collections.notifications[0].id, "n-new");
        assert_eq!(collections.notifications.len(), 5);
        assert_eq!(collections.unread_notification_count(), 3);
    }

    #[test]
    fn test_mark_notification_read_is_idempotent() {
        let mut collections = seeded();
        collections.mark_notification_read("notif-1").unwrap();
        collections.mark_notification_read("notif-1").unwrap();

        assert_eq!(collections.notifications.len(), 4);
        assert_eq!(
            collections
                .notifications
                .iter()
                .filter(|n| n.id == "notif-1" && n.read)
                .count(),
            1
        );
        assert!(collections.mark_notification_read("nope").is_err());
    }

    #[test]
    fn test_remove_borrowed_drops_all_duplicates() {
        let mut collections = seeded();
        collections.push_borrowed(borrowed("x1", "2"));
        collections.push_borrowed(borrowed("x2", "9"));

        assert_eq!(collections.remove_borrowed("2"), 2);
        assert_eq!(collections.remove_borrowed("2"), 0);
        let remaining: Vec<&str> = collections
            .borrowed_books
            .iter()
            .map(|l| l.id.as_str())
            .collect();
        assert_eq!(remaining, vec!["b2", "x2"]);
    }
}
