//! # Store Error Types
//!
//! Error types for domain store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError (bookswap-core)                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds lookup misses and session checks      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  commands (boundary) ← false for auth, silent no-op otherwise          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Pages show "invalid credentials" or nothing at all                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use bookswap_core::ValidationError;
use thiserror::Error;

/// Domain store errors.
///
/// None of these ever reach a page: the command boundary absorbs them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No record with this id in the collection the operation targets.
    ///
    /// ## When This Occurs
    /// - Approving or rejecting an id that is not an incoming request
    /// - Marking an unknown notification as read
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// The operation needs a logged-in user and there is none.
    #[error("No active session")]
    NoSession,

    /// Credentials were rejected.
    #[error("Invalid credentials: {0}")]
    Validation(#[from] ValidationError),
}

impl StoreError {
    pub fn not_found(entity: &'static str, id: &str) -> Self {
        StoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;
