//! # Profile Commands

use bookswap_core::UserUpdate;
use tracing::debug;

use super::absorb;
use crate::state::DomainStore;

/// Merges the edit-profile form into the session user. No-op when logged out.
pub fn update_profile(store: &DomainStore, fields: UserUpdate) {
    debug!("update_profile command");
    absorb("update_profile", store.update_profile(fields));
}
