//! # Seed Fixtures
//!
//! The demo records every fresh store starts with.
//!
//! ## Reproducibility
//! Timestamps are fixed offsets from a caller-supplied reference instant, so
//! a test that passes its own `now` gets byte-identical data on every run.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Collection          Records                                           │
//! │  ──────────          ───────                                           │
//! │  messages            "1" (priya → me, unread), "2" (me → priya)        │
//! │  listed              l1 (book 3), l2 (book 5, borrowed), l3 (book 7)   │
//! │  borrowed            b1 (book 2, maya), b2 (book 4, jonas)             │
//! │  incoming requests   req-1 (priya, book 3), req-2 (maya, book 7)       │
//! │  outgoing requests   req-out-1 (approved), req-out-2 (pending)         │
//! │  notifications       notif-1 .. notif-4, newest first                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{
    BookListing, BorrowRequest, ListingStatus, Message, Notification, NotificationKind,
    RequestStatus, User,
};
use crate::{DEFAULT_LISTING_DISTANCE, DEMO_USER_ID};

const PRIYA_ID: &str = "priya-user";
const MAYA_ID: &str = "maya-user";
const JONAS_ID: &str = "jonas-user";

/// All seeded collections, built relative to one reference instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixtures {
    pub messages: Vec<Message>,
    pub listed_books: Vec<BookListing>,
    pub borrowed_books: Vec<BookListing>,
    pub incoming_requests: Vec<BorrowRequest>,
    pub outgoing_requests: Vec<BorrowRequest>,
    /// Newest first.
    pub notifications: Vec<Notification>,
}

impl Fixtures {
    /// Builds the seed data with timestamps relative to `now`.
    pub fn at(now: DateTime<Utc>) -> Self {
        let hours_ago = |h: i64| now - Duration::hours(h);

        Fixtures {
            messages: vec![
                message(
                    "1",
                    PRIYA_ID,
                    DEMO_USER_ID,
                    "Hi! I'd love to borrow The Midnight Library. Are you available to meet this weekend?",
                    hours_ago(24),
                    false,
                ),
                message(
                    "2",
                    DEMO_USER_ID,
                    PRIYA_ID,
                    "Absolutely! How about Saturday afternoon at the coffee shop on 5th?",
                    hours_ago(1),
                    true,
                ),
            ],
            listed_books: vec![
                listing("l1", "3", DEMO_USER_ID, ListingStatus::Available, "Like new", DEFAULT_LISTING_DISTANCE),
                listing("l2", "5", DEMO_USER_ID, ListingStatus::Borrowed, "Good", DEFAULT_LISTING_DISTANCE),
                listing("l3", "7", DEMO_USER_ID, ListingStatus::Available, "Very good", DEFAULT_LISTING_DISTANCE),
            ],
            borrowed_books: vec![
                listing("b1", "2", MAYA_ID, ListingStatus::Borrowed, "Like new", "0.8 mi"),
                listing("b2", "4", JONAS_ID, ListingStatus::Borrowed, "Good", "1.2 mi"),
            ],
            incoming_requests: vec![
                BorrowRequest {
                    id: "req-1".to_string(),
                    book_id: "3".to_string(),
                    requester_id: PRIYA_ID.to_string(),
                    requester_name: "Priya".to_string(),
                    requester_avatar: "/avatar_priya.jpg".to_string(),
                    owner_id: DEMO_USER_ID.to_string(),
                    message: "Hi! I saw you have The Silent Sanctuary. I'd love to borrow it this weekend if it's available!".to_string(),
                    status: RequestStatus::Pending,
                    created_at: hours_ago(1),
                },
                BorrowRequest {
                    id: "req-2".to_string(),
                    book_id: "7".to_string(),
                    requester_id: MAYA_ID.to_string(),
                    requester_name: "Maya".to_string(),
                    requester_avatar: "/avatar_maya.jpg".to_string(),
                    owner_id: DEMO_USER_ID.to_string(),
                    message: "Hey! Can I borrow The Whispers of Avalon? I've been wanting to read this for a while.".to_string(),
                    status: RequestStatus::Pending,
                    created_at: hours_ago(2),
                },
            ],
            outgoing_requests: vec![
                BorrowRequest {
                    id: "req-out-1".to_string(),
                    book_id: "1".to_string(),
                    requester_id: DEMO_USER_ID.to_string(),
                    requester_name: "Alex Reader".to_string(),
                    requester_avatar: "/avatar_jonas.jpg".to_string(),
                    owner_id: PRIYA_ID.to_string(),
                    message: "Hi Priya! Would love to borrow The Midnight Library. Are you free this weekend?".to_string(),
                    status: RequestStatus::Approved,
                    created_at: hours_ago(24),
                },
                BorrowRequest {
                    id: "req-out-2".to_string(),
                    book_id: "6".to_string(),
                    requester_id: DEMO_USER_ID.to_string(),
                    requester_name: "Alex Reader".to_string(),
                    requester_avatar: "/avatar_jonas.jpg".to_string(),
                    owner_id: JONAS_ID.to_string(),
                    message: "Interested in borrowing The Maritime Chronicles. Let me know!".to_string(),
                    status: RequestStatus::Pending,
                    created_at: hours_ago(12),
                },
            ],
            notifications: vec![
                Notification::new(
                    "notif-1",
                    NotificationKind::RequestReceived,
                    "New borrow request",
                    "Priya wants to borrow The Silent Sanctuary",
                    hours_ago(1),
                )
                .related_to("req-1")
                .with_action_url("/requests"),
                Notification::new(
                    "notif-2",
                    NotificationKind::RequestApproved,
                    "Request approved!",
                    "Priya approved your request for The Midnight Library",
                    hours_ago(24),
                )
                .related_to("req-out-1")
                .with_action_url("/requests"),
                Notification::new(
                    "notif-3",
                    NotificationKind::ReturnReminder,
                    "Return reminder",
                    "The Whispering Leaves is due for return in 2 days",
                    hours_ago(48),
                )
                .related_to("b1")
                .read(),
                Notification::new(
                    "notif-4",
                    NotificationKind::Message,
                    "New message from Priya",
                    "Hi! I'd love to borrow The Midnight Library...",
                    hours_ago(24),
                )
                .related_to("1")
                .with_action_url("/profile")
                .read(),
            ],
        }
    }

    /// Builds the seed data relative to the current time.
    pub fn now() -> Self {
        Fixtures::at(Utc::now())
    }
}

/// The fixed identity every successful login resolves to.
pub fn demo_user() -> User {
    User {
        id: DEMO_USER_ID.to_string(),
        name: "Alex Reader".to_string(),
        email: "alex@example.com".to_string(),
        avatar: "/avatar_jonas.jpg".to_string(),
        location: "Brooklyn, NY".to_string(),
        bio: "Avid reader who loves fiction and mystery novels. Always looking for my next great read!"
            .to_string(),
        books_listed: 8,
        books_borrowed: 12,
        rating: 4.9,
        member_since: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default(),
    }
}

fn message(
    id: &str,
    sender_id: &str,
    receiver_id: &str,
    content: &str,
    timestamp: DateTime<Utc>,
    read: bool,
) -> Message {
    Message {
        id: id.to_string(),
        sender_id: sender_id.to_string(),
        receiver_id: receiver_id.to_string(),
        content: content.to_string(),
        timestamp,
        read,
    }
}

fn listing(
    id: &str,
    book_id: &str,
    owner_id: &str,
    status: ListingStatus,
    condition: &str,
    distance: &str,
) -> BookListing {
    BookListing {
        id: id.to_string(),
        book_id: book_id.to_string(),
        owner_id: owner_id.to_string(),
        status,
        condition: condition.to_string(),
        distance: distance.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_fixture_counts() {
        let fixtures = Fixtures::now();
        assert_eq!(fixtures.messages.len(), 2);
        assert_eq!(fixtures.listed_books.len(), 3);
        assert_eq!(fixtures.borrowed_books.len(), 2);
        assert_eq!(fixtures.incoming_requests.len(), 2);
        assert_eq!(fixtures.outgoing_requests.len(), 2);
        assert_eq!(fixtures.notifications.len(), 4);
    }

    #[test]
    fn test_fixtures_are_reproducible_for_fixed_instant() {
        let now = Utc::now();
        assert_eq!(Fixtures::at(now), Fixtures::at(now));

        let fixtures = Fixtures::at(now);
        assert_eq!(fixtures.messages[0].timestamp, now - Duration::hours(24));
        assert_eq!(fixtures.incoming_requests[1].created_at, now - Duration::hours(2));
    }

    #[test]
    fn test_request_views_are_disjoint() {
        let fixtures = Fixtures::now();
        assert!(fixtures
            .incoming_requests
            .iter()
            .all(|r| r.owner_id == DEMO_USER_ID && r.requester_id != DEMO_USER_ID));
        assert!(fixtures
            .outgoing_requests
            .iter()
            .all(|r| r.requester_id == DEMO_USER_ID));
    }

    #[test]
    fn test_seeded_books_exist_in_catalog() {
        let fixtures = Fixtures::now();
        let book_ids = fixtures
            .listed_books
            .iter()
            .chain(&fixtures.borrowed_books)
            .map(|l| l.book_id.as_str())
            .chain(fixtures.incoming_requests.iter().map(|r| r.book_id.as_str()));
        for id in book_ids {
            assert!(catalog::find_book(id).is_some(), "book {} missing", id);
        }
    }

    #[test]
    fn test_demo_user() {
        let user = demo_user();
        assert_eq!(user.id, DEMO_USER_ID);
        assert_eq!(user.member_since.to_string(), "2024-01-15");
    }
}
