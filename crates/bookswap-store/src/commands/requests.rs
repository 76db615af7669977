//! # Borrow Request Commands
//!
//! Owner-side decisions on incoming requests. There is no guard on the
//! current status and no requester-side cancellation.

use tracing::debug;

use super::absorb;
use crate::state::DomainStore;

/// Approves an incoming request. Unknown ids are ignored.
pub fn approve_request(store: &DomainStore, request_id: &str) {
    debug!(request_id = %request_id, "approve_request command");
    absorb("approve_request", store.approve_request(request_id));
}

/// Rejects an incoming request. Unknown ids are ignored.
pub fn reject_request(store: &DomainStore, request_id: &str) {
    debug!(request_id = %request_id, "reject_request command");
    absorb("reject_request", store.reject_request(request_id));
}
