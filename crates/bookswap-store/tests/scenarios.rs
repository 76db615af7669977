//! End-to-end page flows against a freshly seeded store.

use bookswap_core::{ListingStatus, NotificationKind, RequestStatus, DEMO_USER_ID};
use bookswap_store::commands::{listings, messaging, notifications, requests, session};
use bookswap_store::{DomainStore, StoreConfig};

fn fresh_store() -> DomainStore {
    DomainStore::new(StoreConfig::instant())
}

#[tokio::test]
async fn login_accepts_non_empty_credentials_only() {
    let cases = [
        ("a@b.com", "secret", true),
        ("x", "y", true),
        ("", "secret", false),
        ("a@b.com", "", false),
        ("", "", false),
    ];

    for (email, password, expected) in cases {
        let store = fresh_store();
        assert_eq!(session::login(&store, email, password).await, expected);
        assert_eq!(store.is_authenticated(), expected, "{:?}/{:?}", email, password);
    }
}

#[tokio::test]
async fn login_waits_for_simulated_latency() {
    let store = DomainStore::new(StoreConfig {
        login_latency_ms: 50,
        ..StoreConfig::default()
    });

    let started = std::time::Instant::now();
    assert!(session::login(&store, "a@b.com", "secret").await);
    assert!(started.elapsed() >= std::time::Duration::from_millis(50));
}

#[tokio::test]
async fn store_stays_usable_while_login_is_pending() {
    let store = DomainStore::new(StoreConfig {
        login_latency_ms: 100,
        ..StoreConfig::default()
    });

    let pending = {
        let store = store.clone();
        tokio::spawn(async move { session::login(&store, "a@b.com", "secret").await })
    };

    messaging::send_message(&store, "maya-user", "sent while logging in");
    assert_eq!(store.messages().len(), 3);

    assert!(pending.await.unwrap());
    assert!(store.is_authenticated());
}

#[tokio::test]
async fn logout_always_ends_session() {
    let store = fresh_store();
    session::logout(&store);
    assert!(!store.is_authenticated());

    assert!(session::login(&store, "a@b.com", "secret").await);
    session::logout(&store);
    assert!(!store.is_authenticated());
    assert!(store.current_user().is_none());
}

#[test]
fn approve_then_reject_last_write_wins() {
    let store = fresh_store();
    let before = store.notifications().len();

    requests::approve_request(&store, "req-1");
    assert_eq!(store.notifications().len(), before + 1);

    requests::reject_request(&store, "req-1");
    assert_eq!(store.notifications().len(), before + 2);

    let request = store
        .incoming_requests()
        .into_iter()
        .find(|r| r.id == "req-1")
        .unwrap();
    assert_eq!(request.status, RequestStatus::Rejected);
    assert_eq!(store.notifications()[0].kind, NotificationKind::RequestRejected);
    assert_eq!(store.notifications()[1].kind, NotificationKind::RequestApproved);
}

#[test]
fn mark_notification_read_twice() {
    let store = fresh_store();
    let len = store.notifications().len();

    notifications::mark_notification_read(&store, "notif-2");
    notifications::mark_notification_read(&store, "notif-2");

    let all = store.notifications();
    assert_eq!(all.len(), len);
    assert_eq!(all.iter().filter(|n| n.id == "notif-2" && n.read).count(), 1);
}

#[test]
fn add_book_listing_appends_one_available_entry() {
    let store = fresh_store();
    let before = store.listed_books().len();

    listings::add_book_listing(&store, "8", "Good");

    let listed = store.listed_books();
    assert_eq!(listed.len(), before + 1);
    assert_eq!(listed.last().unwrap().status, ListingStatus::Available);
}

#[tokio::test]
async fn request_book_with_and_without_message() {
    let store = fresh_store();
    assert!(session::login(&store, "a@b.com", "secret").await);
    let borrowed = store.borrowed_books().len();
    let messages = store.messages().len();

    listings::request_book(&store, "6", "nora-user", Some("hello"));

    assert_eq!(store.borrowed_books().len(), borrowed + 1);
    assert_eq!(store.borrowed_books().last().unwrap().status, ListingStatus::Reserved);
    assert_eq!(store.messages().len(), messages + 1);
    let sent = store.messages().pop().unwrap();
    assert_eq!(sent.content, "hello");
    assert_eq!(sent.sender_id, DEMO_USER_ID);
    assert_eq!(sent.receiver_id, "nora-user");

    listings::request_book(&store, "8", "maya-user", None);
    assert_eq!(store.borrowed_books().len(), borrowed + 2);
    assert_eq!(store.messages().len(), messages + 1);
}

#[test]
fn mark_book_returned_removes_every_match() {
    let store = fresh_store();
    listings::request_book(&store, "2", "maya-user", None);
    assert_eq!(store.borrowed_books().iter().filter(|l| l.book_id == "2").count(), 2);
    let before = store.notifications().len();

    listings::mark_book_returned(&store, "2");

    assert!(store.borrowed_books().iter().all(|l| l.book_id != "2"));
    assert_eq!(store.borrowed_books().len(), 1);
    let all = store.notifications();
    assert_eq!(all.len(), before + 1);
    assert_eq!(
        all.iter().filter(|n| n.kind == NotificationKind::ReturnReminder).count(),
        2
    );
    assert_eq!(all[0].kind, NotificationKind::ReturnReminder);
}

#[tokio::test]
async fn listings_survive_logout() {
    let store = DomainStore::empty(StoreConfig::instant());

    assert!(session::login(&store, "a@b.com", "secret").await);
    listings::add_book_listing(&store, "42", "good");

    let listed = store.listed_books();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].book_id, "42");
    assert_eq!(listed[0].condition, "good");
    assert_eq!(listed[0].status, ListingStatus::Available);

    session::logout(&store);

    assert!(!store.is_authenticated());
    assert_eq!(store.listed_books().len(), 1);
}

#[tokio::test]
async fn seeded_listings_survive_logout() {
    let store = fresh_store();
    assert_eq!(store.listed_books().len(), 3);

    assert!(session::login(&store, "a@b.com", "secret").await);
    listings::add_book_listing(&store, "42", "good");
    assert_eq!(store.listed_books().len(), 4);

    session::logout(&store);

    assert!(!store.is_authenticated());
    let listed = store.listed_books();
    assert_eq!(listed.len(), 4);
    assert_eq!(listed[3].book_id, "42");
    assert_eq!(listed[3].status, ListingStatus::Available);
}

#[test]
fn approving_seeded_request() {
    let store = fresh_store();

    requests::approve_request(&store, "req-1");

    let request = store
        .incoming_requests()
        .into_iter()
        .find(|r| r.id == "req-1")
        .unwrap();
    assert_eq!(request.status, RequestStatus::Approved);
    assert_eq!(store.notifications()[0].kind, NotificationKind::RequestApproved);
}

#[test]
fn snapshot_serializes_in_frontend_shape() {
    let store = fresh_store();
    let json = serde_json::to_value(store.snapshot()).unwrap();

    assert_eq!(json["isAuthenticated"], false);
    assert!(json["currentUser"].is_null());
    assert_eq!(json["listedBooks"][0]["bookId"], "3");
    assert_eq!(json["incomingRequests"][0]["status"], "pending");
    assert_eq!(json["notifications"][0]["type"], "request_received");
    assert_eq!(json["notifications"][0]["actionUrl"], "/requests");
}
