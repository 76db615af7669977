//! # State Module
//!
//! Owns the in-memory domain state.
//!
//! ## One Lock
//! Approving a request writes the request and the notifications;
//! `request_book` writes the borrowed books and the messages. Session and
//! collections therefore sit behind a single `Mutex`, and every operation
//! takes it exactly once.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │  DomainStore (Clone)                                            │   │
//! │  │  ├── Arc<Mutex<StoreInner>>                                     │   │
//! │  │  │     ├── Session       (0..1 User)                            │   │
//! │  │  │     └── Collections   (messages, listings, requests, notifs) │   │
//! │  │  └── Arc<StoreConfig>    (read-only)                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod collections;
mod config;
mod session;
mod store;

pub use collections::Collections;
pub use config::StoreConfig;
pub use session::Session;
pub use store::{DomainStore, StoreSnapshot};
