//! # Commands Module
//!
//! The contract the web pages call. Every function takes the injected
//! [`DomainStore`](crate::state::DomainStore) handle first, the way a page
//! receives it from its provider.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs            ◄─── You are here (shared helpers)
//! ├── session.rs        ◄─── login, signup, logout
//! ├── profile.rs        ◄─── update_profile
//! ├── messaging.rs      ◄─── send_message
//! ├── listings.rs       ◄─── add_book_listing, request_book, mark_book_returned
//! ├── requests.rs       ◄─── approve_request, reject_request
//! └── notifications.rs  ◄─── mark_notification_read, mark_all_notifications_read
//! ```
//!
//! ## Boundary Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Store result                 What the page sees                        │
//! │  ────────────                 ──────────────────                        │
//! │  Ok(_)                        () / true                                 │
//! │  Err(Validation)              false (login, signup)                     │
//! │  Err(NotFound | NoSession)    (), logged at debug, otherwise silent     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Reads (`current_user`, `messages`, `notifications`, ...) are plain methods on
//! the store handle and need no boundary wrapper.

pub mod listings;
pub mod messaging;
pub mod notifications;
pub mod profile;
pub mod requests;
pub mod session;

use tracing::debug;

use crate::error::StoreResult;

/// Drops the outcome of a store call, logging a failure.
pub(crate) fn absorb<T>(command: &'static str, result: StoreResult<T>) {
    if let Err(err) = result {
        debug!(command, %err, "Command had no effect");
    }
}
