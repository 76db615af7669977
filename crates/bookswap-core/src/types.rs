//! # Domain Types
//!
//! Entities owned by the BookSwap domain store.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      User       │   │   BookListing   │   │  BorrowRequest  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  name, email    │   │  book_id        │   │  book_id        │       │
//! │  │  counters       │   │  owner_id       │   │  requester_*    │       │
//! │  │  member_since   │   │  status         │   │  status         │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Message     │   │  Notification   │   │  Conversation   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  sender_id      │   │  kind           │   │  derived, never │       │
//! │  │  receiver_id    │   │  related_id     │   │  stored         │       │
//! │  │  read           │   │  read           │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! Other people never exist as full `User` records. A `BorrowRequest` freezes
//! the requester's name and avatar at creation time instead of joining them
//! live.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// User
// =============================================================================

/// The authenticated actor of the current session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Asset path of the avatar image.
    pub avatar: String,
    /// Free-form location, e.g. "Brooklyn, NY".
    pub location: String,
    pub bio: String,
    /// Denormalized counter, never recomputed by the store.
    pub books_listed: u32,
    /// Denormalized counter, never recomputed by the store.
    pub books_borrowed: u32,
    pub rating: f64,
    #[ts(as = "String")]
    pub member_since: NaiveDate,
}

impl User {
    /// Merges every field set on `update` into this user.
    ///
    /// No field-level validation: an empty name is accepted.
    pub fn apply(&mut self, update: UserUpdate) {
        let UserUpdate {
            id,
            name,
            email,
            avatar,
            location,
            bio,
            books_listed,
            books_borrowed,
            rating,
            member_since,
        } = update;

        if let Some(id) = id {
            self.id = id;
        }
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(avatar) = avatar {
            self.avatar = avatar;
        }
        if let Some(location) = location {
            self.location = location;
        }
        if let Some(bio) = bio {
            self.bio = bio;
        }
        if let Some(books_listed) = books_listed {
            self.books_listed = books_listed;
        }
        if let Some(books_borrowed) = books_borrowed {
            self.books_borrowed = books_borrowed;
        }
        if let Some(rating) = rating {
            self.rating = rating;
        }
        if let Some(member_since) = member_since {
            self.member_since = member_since;
        }
    }
}

/// A partial `User`, as submitted by the edit-profile form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub books_listed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub books_borrowed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional, as = "Option<String>")]
    pub member_since: Option<NaiveDate>,
}

// =============================================================================
// Book Listing
// =============================================================================

/// Availability of a listed copy.
///
/// Informational only: the store sets it once when a listing is inserted and
/// never transitions it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    Available,
    Borrowed,
    Reserved,
}

impl Default for ListingStatus {
    fn default() -> Self {
        ListingStatus::Available
    }
}

/// A single physical copy of a book made available by one owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BookListing {
    pub id: String,
    /// Catalog id of the book.
    pub book_id: String,
    pub owner_id: String,
    pub status: ListingStatus,
    /// Free text, e.g. "Like new".
    pub condition: String,
    /// Display string, e.g. "0.5 mi".
    pub distance: String,
}

// =============================================================================
// Borrow Request
// =============================================================================

/// Lifecycle of a borrow request.
///
/// `Pending` moves to `Approved` or `Rejected` by owner action only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl Default for RequestStatus {
    fn default() -> Self {
        RequestStatus::Pending
    }
}

/// A proposal from a requester to an owner to borrow a specific book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BorrowRequest {
    pub id: String,
    pub book_id: String,
    pub requester_id: String,
    /// Requester name at time of request (frozen).
    pub requester_name: String,
    /// Requester avatar at time of request (frozen).
    pub requester_avatar: String,
    pub owner_id: String,
    pub message: String,
    pub status: RequestStatus,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl BorrowRequest {
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }
}

// =============================================================================
// Message
// =============================================================================

/// A direct message between two users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub content: String,
    #[ts(as = "String")]
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

impl Message {
    /// Returns the id on the other side of the message from `user_id`.
    pub fn counterpart<'a>(&'a self, user_id: &str) -> &'a str {
        if self.sender_id == user_id {
            &self.receiver_id
        } else {
            &self.sender_id
        }
    }

    /// True if `user_id` received this message and has not read it yet.
    pub fn is_unread_for(&self, user_id: &str) -> bool {
        !self.read && self.receiver_id == user_id
    }
}

/// Messages exchanged with one counterpart.
///
/// Derived from the message log on demand; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub counterpart_id: String,
    /// In the order the messages were appended.
    pub messages: Vec<Message>,
    /// Unread messages addressed to the viewing user.
    pub unread_count: usize,
}

impl Conversation {
    /// Groups `messages` by counterpart as seen by `user_id`.
    ///
    /// Conversations come out in first-seen order.
    pub fn group(messages: &[Message], user_id: &str) -> Vec<Conversation> {
        let mut conversations: Vec<Conversation> = Vec::new();

        for message in messages {
            let counterpart = message.counterpart(user_id);
            let unread = usize::from(message.is_unread_for(user_id));

            match conversations
                .iter_mut()
                .find(|c| c.counterpart_id == counterpart)
            {
                Some(conversation) => {
                    conversation.messages.push(message.clone());
                    conversation.unread_count += unread;
                }
                None => conversations.push(Conversation {
                    counterpart_id: counterpart.to_string(),
                    messages: vec![message.clone()],
                    unread_count: unread,
                }),
            }
        }

        conversations
    }
}

// =============================================================================
// Notification
// =============================================================================

/// What a notification announces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    RequestReceived,
    RequestApproved,
    RequestRejected,
    ReturnReminder,
    Message,
}

/// A user-facing event record. Never deleted, only marked read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    #[ts(as = "String")]
    pub timestamp: DateTime<Utc>,
    pub read: bool,
    /// Borrow request, listing, book or message id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub related_id: Option<String>,
    /// Navigation target, opaque to the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub action_url: Option<String>,
}

impl Notification {
    /// Creates an unread notification with no related entity.
    pub fn new(
        id: impl Into<String>,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Notification {
            id: id.into(),
            kind,
            title: title.into(),
            message: message.into(),
            timestamp,
            read: false,
            related_id: None,
            action_url: None,
        }
    }

    pub fn related_to(mut self, id: impl Into<String>) -> Self {
        self.related_id = Some(id.into());
        self
    }

    pub fn with_action_url(mut self, url: impl Into<String>) -> Self {
        self.action_url = Some(url.into());
        self
    }

    pub fn read(mut self) -> Self {
        self.read = true;
        self
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
