//! # bookswap-core: Domain Model for BookSwap
//!
//! This crate holds the entities of the BookSwap lending community as plain
//! data with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        BookSwap Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web frontend (pages)                         │   │
//! │  │   Profile ──► Book Detail ──► List Book ──► Requests           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                bookswap-store (DomainStore)                     │   │
//! │  │    login, send_message, approve_request, etc.                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ bookswap-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  catalog  │  │ fixtures  │  │ validation│  │   │
//! │  │   │   User    │  │   Book    │  │ seed data │  │credentials│  │   │
//! │  │   │  Listing  │  │   Genre   │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOCKS • NO NETWORK • PLAIN DATA                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain entities (User, BookListing, BorrowRequest, etc.)
//! - [`catalog`] - The static book catalog the pages browse
//! - [`fixtures`] - Demo records every fresh store starts with
//! - [`error`] - Domain error types
//! - [`validation`] - Credential checks for login and signup
//!
//! ## Example Usage
//!
//! ```rust
//! use bookswap_core::catalog;
//! use bookswap_core::validation::validate_login;
//!
//! assert!(validate_login("a@b.com", "secret").is_ok());
//! assert!(validate_login("a@b.com", "").is_err());
//!
//! let book = catalog::find_book("1").unwrap();
//! assert_eq!(book.title, "The Midnight Library");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod fixtures;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use fixtures::Fixtures;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Id of the demo identity every login resolves to.
///
/// Also the sender substituted when a message or listing is created while
/// nobody is logged in.
pub const DEMO_USER_ID: &str = "current-user";

/// Distance shown on listings the current user creates.
pub const DEFAULT_LISTING_DISTANCE: &str = "0.5 mi";

/// Distance shown on books the current user reserves from a neighbour.
pub const DEFAULT_BORROW_DISTANCE: &str = "0.8 mi";

/// Condition recorded on a freshly reserved book.
pub const DEFAULT_BORROW_CONDITION: &str = "Like new";

/// Simulated network latency for login and signup, in milliseconds.
pub const SIMULATED_LATENCY_MS: u64 = 500;
