//! # Domain Store
//!
//! The one owner of session and collection state.
//!
//! ## Thread Safety
//! The store is a cheap-to-clone handle around `Arc<Mutex<StoreInner>>`:
//! 1. Every page or component gets a clone injected at startup
//! 2. Each operation takes the lock exactly once, so related writes
//!    (a status change and its notification) land together
//! 3. `login`/`signup` sleep *before* locking; the lock is never held
//!    across an await
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Operations                                     │
//! │                                                                         │
//! │  Page Action              Store Method            State Change          │
//! │  ───────────              ────────────            ────────────          │
//! │                                                                         │
//! │  Sign in ────────────────► login() ─────────────► session = demo user  │
//! │                                                                         │
//! │  Send chat ──────────────► send_message() ──────► messages.push(m)     │
//! │                                                                         │
//! │  List a book ────────────► add_book_listing() ──► listed.push(l)       │
//! │                                                                         │
//! │  Borrow ─────────────────► request_book() ──────► borrowed.push(l)     │
//! │                                                  (+ send_message)      │
//! │                                                                         │
//! │  Approve ────────────────► approve_request() ───► status + notify      │
//! │                                                                         │
//! │  Returned ───────────────► mark_book_returned() ► borrowed.retain      │
//! │                                                  + notify              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use bookswap_core::fixtures::demo_user;
use bookswap_core::validation::{validate_login, validate_signup};
use bookswap_core::{
    catalog, BookListing, BorrowRequest, Conversation, Fixtures, ListingStatus, Message,
    Notification, NotificationKind, RequestStatus, User, UserUpdate,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ts_rs::TS;
use uuid::Uuid;

use super::collections::Collections;
use super::config::StoreConfig;
use super::session::Session;
use crate::error::StoreResult;

/// Everything behind the lock.
#[derive(Debug, Default)]
struct StoreInner {
    session: Session,
    collections: Collections,
}

/// Full read-only view of the store, as the pages consume it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub current_user: Option<User>,
    pub is_authenticated: bool,
    pub messages: Vec<Message>,
    pub listed_books: Vec<BookListing>,
    pub borrowed_books: Vec<BookListing>,
    pub incoming_requests: Vec<BorrowRequest>,
    pub outgoing_requests: Vec<BorrowRequest>,
    pub notifications: Vec<Notification>,
}

/// Handle to the in-memory domain state.
///
/// Clones share the same state.
#[derive(Debug, Clone)]
pub struct DomainStore {
    inner: Arc<Mutex<StoreInner>>,
    config: Arc<StoreConfig>,
}

impl Default for DomainStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl DomainStore {
    /// Creates a store seeded with the demo fixtures, timestamped from now.
    pub fn new(config: StoreConfig) -> Self {
        Self::with_fixtures(config, Fixtures::now())
    }

    /// Creates a store seeded with the given fixtures.
    pub fn with_fixtures(config: StoreConfig, fixtures: Fixtures) -> Self {
        DomainStore {
            inner: Arc::new(Mutex::new(StoreInner {
                session: Session::default(),
                collections: Collections::from(fixtures),
            })),
            config: Arc::new(config),
        }
    }

    /// Creates a store with no session and no records.
    pub fn empty(config: StoreConfig) -> Self {
        DomainStore {
            inner: Arc::new(Mutex::new(StoreInner::default())),
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // Every operation already leaves the state whole before it can panic,
    // so a poisoned lock still guards consistent data.
    fn with_inner<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&StoreInner) -> R,
    {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&inner)
    }

    fn with_inner_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut StoreInner) -> R,
    {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut inner)
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Logs in as the demo identity.
    ///
    /// Waits for the configured latency first, then succeeds iff both fields
    /// are non-empty. A failed login leaves any existing session untouched.
    pub async fn login(&self, email: &str, password: &str) -> StoreResult<User> {
        tokio::time::sleep(self.config.login_latency()).await;
        validate_login(email, password)?;

        let user = demo_user();
        self.with_inner_mut(|inner| inner.session.start(user.clone()));
        info!(user_id = %user.id, "Session started");
        Ok(user)
    }

    /// Signs up: the demo identity with `name` and `email` replaced.
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> StoreResult<User> {
        tokio::time::sleep(self.config.login_latency()).await;
        validate_signup(name, email, password)?;

        let user = User {
            name: name.to_string(),
            email: email.to_string(),
            ..demo_user()
        };
        self.with_inner_mut(|inner| inner.session.start(user.clone()));
        info!(user_id = %user.id, "Account created, session started");
        Ok(user)
    }

    /// Clears the session. Collections persist.
    pub fn logout(&self) {
        if let Some(user) = self.with_inner_mut(|inner| inner.session.end()) {
            info!(user_id = %user.id, "Session ended");
        }
    }

    pub fn current_user(&self) -> Option<User> {
        self.with_inner(|inner| inner.session.user().cloned())
    }

    pub fn is_authenticated(&self) -> bool {
        self.with_inner(|inner| inner.session.is_active())
    }

    /// Merges `update` into the session user.
    pub fn update_profile(&self, update: UserUpdate) -> StoreResult<User> {
        self.with_inner_mut(|inner| {
            let user = inner.session.require_user_mut()?;
            user.apply(update);
            debug!(user_id = %user.id, "Profile updated");
            Ok(user.clone())
        })
    }

    // =========================================================================
    // Messaging
    // =========================================================================

    /// Appends a message from the session user (or the fallback id).
    ///
    /// Neither the content nor the receiver is checked.
    pub fn send_message(&self, receiver_id: &str, content: &str) -> Message {
        self.with_inner_mut(|inner| self.send_message_locked(inner, receiver_id, content))
    }

    fn send_message_locked(
        &self,
        inner: &mut StoreInner,
        receiver_id: &str,
        content: &str,
    ) -> Message {
        let message = Message {
            id: new_id(),
            sender_id: inner
                .session
                .user_id_or(&self.config.fallback_user_id)
                .to_string(),
            receiver_id: receiver_id.to_string(),
            content: content.to_string(),
            timestamp: Utc::now(),
            read: false,
        };
        debug!(message_id = %message.id, receiver_id = %receiver_id, "Message sent");
        inner.collections.push_message(message.clone());
        message
    }

    /// Messages grouped by counterpart, from the session user's side.
    pub fn conversations(&self) -> Vec<Conversation> {
        self.with_inner(|inner| {
            let me = inner.session.user_id_or(&self.config.fallback_user_id);
            Conversation::group(&inner.collections.messages, me)
        })
    }

    /// Unread messages addressed to the session user.
    pub fn unread_message_count(&self) -> usize {
        self.with_inner(|inner| {
            let me = inner.session.user_id_or(&self.config.fallback_user_id);
            inner
                .collections
                .messages
                .iter()
                .filter(|m| m.is_unread_for(me))
                .count()
        })
    }

    // =========================================================================
    // Listings
    // =========================================================================

    /// Lists a copy of `book_id` as available. Duplicates are allowed.
    pub fn add_book_listing(&self, book_id: &str, condition: &str) -> BookListing {
        self.with_inner_mut(|inner| {
            let listing = BookListing {
                id: new_id(),
                book_id: book_id.to_string(),
                owner_id: inner
                    .session
                    .user_id_or(&self.config.fallback_user_id)
                    .to_string(),
                status: ListingStatus::Available,
                condition: condition.to_string(),
                distance: self.config.listing_distance.clone(),
            };
            debug!(listing_id = %listing.id, book_id = %book_id, "Book listed");
            inner.collections.push_listed(listing.clone());
            listing
        })
    }

    /// Reserves `book_id` from `owner_id`.
    ///
    /// Adds a `reserved` entry to the borrowed books and, when `message` is
    /// non-empty, sends it to the owner. No `BorrowRequest` is created; see
    /// [`DomainStore::submit_borrow_request`] for that.
    pub fn request_book(&self, book_id: &str, owner_id: &str, message: Option<&str>) -> BookListing {
        self.with_inner_mut(|inner| self.request_book_locked(inner, book_id, owner_id, message))
    }

    fn request_book_locked(
        &self,
        inner: &mut StoreInner,
        book_id: &str,
        owner_id: &str,
        message: Option<&str>,
    ) -> BookListing {
        let reservation = BookListing {
            id: new_id(),
            book_id: book_id.to_string(),
            owner_id: owner_id.to_string(),
            status: ListingStatus::Reserved,
            condition: self.config.borrow_condition.clone(),
            distance: self.config.borrow_distance.clone(),
        };
        debug!(listing_id = %reservation.id, book_id = %book_id, owner_id = %owner_id, "Book reserved");
        inner.collections.push_borrowed(reservation.clone());

        if let Some(content) = message.filter(|m| !m.is_empty()) {
            self.send_message_locked(inner, owner_id, content);
        }

        reservation
    }

    /// Reserves the book and records a pending outgoing request for it.
    ///
    /// The requester's name and avatar are frozen from the session user.
    /// Needs a session; without one nothing is written.
    pub fn submit_borrow_request(
        &self,
        book_id: &str,
        owner_id: &str,
        message: Option<&str>,
    ) -> StoreResult<BorrowRequest> {
        self.with_inner_mut(|inner| {
            let requester = inner.session.require_user()?;
            let request = BorrowRequest {
                id: new_id(),
                book_id: book_id.to_string(),
                requester_id: requester.id.clone(),
                requester_name: requester.name.clone(),
                requester_avatar: requester.avatar.clone(),
                owner_id: owner_id.to_string(),
                message: message.unwrap_or_default().to_string(),
                status: RequestStatus::Pending,
                created_at: Utc::now(),
            };

            self.request_book_locked(inner, book_id, owner_id, message);
            inner.collections.push_outgoing(request.clone());
            debug!(request_id = %request.id, book_id = %book_id, "Borrow request submitted");
            Ok(request)
        })
    }

    /// Removes every borrowed entry for `book_id` and announces the return.
    ///
    /// The announcement is added even when nothing matched. The owner's
    /// listing is not touched. Returns how many entries were removed.
    pub fn mark_book_returned(&self, book_id: &str) -> usize {
        let message = match catalog::require_book(book_id) {
            Ok(book) => format!("{} has been marked as returned", book.title),
            Err(err) => {
                debug!(%err, "Returned book is not in the catalog");
                "Book has been marked as returned".to_string()
            }
        };

        self.with_inner_mut(|inner| {
            let removed = inner.collections.remove_borrowed(book_id);
            inner.collections.prepend_notification(
                Notification::new(
                    notification_id(),
                    NotificationKind::ReturnReminder,
                    "Book returned",
                    message,
                    Utc::now(),
                )
                .related_to(book_id),
            );
            debug!(book_id = %book_id, removed, "Book returned");
            removed
        })
    }

    // =========================================================================
    // Requests
    // =========================================================================

    /// Approves an incoming request and notifies about it.
    pub fn approve_request(&self, request_id: &str) -> StoreResult<BorrowRequest> {
        self.decide_request(request_id, Decision::Approve)
    }

    /// Rejects an incoming request and notifies about it.
    pub fn reject_request(&self, request_id: &str) -> StoreResult<BorrowRequest> {
        self.decide_request(request_id, Decision::Reject)
    }

    fn decide_request(
        &self,
        request_id: &str,
        decision: Decision,
    ) -> StoreResult<BorrowRequest> {
        self.with_inner_mut(|inner| {
            let request = inner
                .collections
                .set_incoming_status(request_id, decision.status())?
                .clone();
            inner
                .collections
                .prepend_notification(decision_notification(&request, decision, Utc::now()));
            debug!(request_id = %request_id, decision = ?decision, "Borrow request decided");
            Ok(request)
        })
    }

    pub fn pending_incoming_count(&self) -> usize {
        self.with_inner(|inner| inner.collections.pending_incoming_count())
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    pub fn mark_notification_read(&self, notification_id: &str) -> StoreResult<()> {
        self.with_inner_mut(|inner| inner.collections.mark_notification_read(notification_id))
    }

    pub fn unread_notification_count(&self) -> usize {
        self.with_inner(|inner| inner.collections.unread_notification_count())
    }

    // =========================================================================
    // Snapshots
    // =========================================================================

    pub fn messages(&self) -> Vec<Message> {
        self.with_inner(|inner| inner.collections.messages.clone())
    }

    pub fn listed_books(&self) -> Vec<BookListing> {
        self.with_inner(|inner| inner.collections.listed_books.clone())
    }

    pub fn borrowed_books(&self) -> Vec<BookListing> {
        self.with_inner(|inner| inner.collections.borrowed_books.clone())
    }

    pub fn incoming_requests(&self) -> Vec<BorrowRequest> {
        self.with_inner(|inner| inner.collections.incoming_requests.clone())
    }

    pub fn outgoing_requests(&self) -> Vec<BorrowRequest> {
        self.with_inner(|inner| inner.collections.outgoing_requests.clone())
    }

    /// Newest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.with_inner(|inner| inner.collections.notifications.clone())
    }

    /// Everything at once, under a single lock.
    pub fn snapshot(&self) -> StoreSnapshot {
        self.with_inner(|inner| {
            let c = &inner.collections;
            StoreSnapshot {
                current_user: inner.session.user().cloned(),
                is_authenticated: inner.session.is_active(),
                messages: c.messages.clone(),
                listed_books: c.listed_books.clone(),
                borrowed_books: c.borrowed_books.clone(),
                incoming_requests: c.incoming_requests.clone(),
                outgoing_requests: c.outgoing_requests.clone(),
                notifications: c.notifications.clone(),
            }
        })
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn notification_id() -> String {
    format!("notif-{}", Uuid::new_v4())
}

/// Outcome of an owner deciding on an incoming request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decision {
    Approve,
    Reject,
}

impl Decision {
    fn status(self) -> RequestStatus {
        match self {
            Decision::Approve => RequestStatus::Approved,
            Decision::Reject => RequestStatus::Rejected,
        }
    }
}

fn decision_notification(
    request: &BorrowRequest,
    decision: Decision,
    now: DateTime<Utc>,
) -> Notification {
    let (kind, title, verb) = match decision {
        Decision::Approve => (NotificationKind::RequestApproved, "Request approved", "approved"),
        Decision::Reject => (NotificationKind::RequestRejected, "Request rejected", "rejected"),
    };
    Notification::new(
        notification_id(),
        kind,
        title,
        format!("You {} {}'s request", verb, request.requester_name),
        now,
    )
    .related_to(request.id.as_str())
}
