//! # Session State
//!
//! Zero or one authenticated user.
//!
//! ```text
//! ┌──────────┐  login / signup   ┌──────────┐
//! │   None   │ ────────────────► │ Some(u)  │ ──┐ update_profile
//! │          │ ◄──────────────── │          │ ◄─┘
//! └──────────┘      logout       └──────────┘
//! ```
//!
//! Ending the session never touches the collections.

use bookswap_core::User;
use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.user.is_some()
    }

    /// Replaces whatever session exists with `user`.
    pub fn start(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Clears the session, returning the user who was logged in.
    pub fn end(&mut self) -> Option<User> {
        self.user.take()
    }

    /// Id of the session user, or `fallback` when nobody is logged in.
    pub fn user_id_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.user.as_ref().map_or(fallback, |u| u.id.as_str())
    }

    pub fn require_user(&self) -> StoreResult<&User> {
        self.user.as_ref().ok_or(StoreError::NoSession)
    }

    pub fn require_user_mut(&mut self) -> StoreResult<&mut User> {
        self.user.as_mut().ok_or(StoreError::NoSession)
    }
}
