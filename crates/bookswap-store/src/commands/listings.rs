//! # Listing Commands
//!
//! ## Borrow Flow (book detail page)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "Request to borrow" ──► modal with optional note                      │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  submit_borrow_request(store, book_id, owner_id, note)                 │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  1. borrowed_books += reserved copy      (request_book)        │    │
//! │  │  2. messages += note, if any             (request_book)        │    │
//! │  │  3. outgoing_requests += pending request                       │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use super::absorb;
use crate::state::DomainStore;

/// Lists a copy of `book_id` as available.
pub fn add_book_listing(store: &DomainStore, book_id: &str, condition: &str) {
    debug!(book_id = %book_id, "add_book_listing command");
    store.add_book_listing(book_id, condition);
}

/// Reserves a copy and optionally messages the owner. Creates no request.
pub fn request_book(store: &DomainStore, book_id: &str, owner_id: &str, message: Option<&str>) {
    debug!(book_id = %book_id, owner_id = %owner_id, "request_book command");
    store.request_book(book_id, owner_id, message);
}

/// Like [`request_book`], plus a pending outgoing request. No-op when
/// logged out.
pub fn submit_borrow_request(
    store: &DomainStore,
    book_id: &str,
    owner_id: &str,
    message: Option<&str>,
) {
    debug!(book_id = %book_id, owner_id = %owner_id, "submit_borrow_request command");
    absorb(
        "submit_borrow_request",
        store.submit_borrow_request(book_id, owner_id, message),
    );
}

/// Drops every borrowed entry for `book_id` and announces the return.
pub fn mark_book_returned(store: &DomainStore, book_id: &str) {
    debug!(book_id = %book_id, "mark_book_returned command");
    store.mark_book_returned(book_id);
}
