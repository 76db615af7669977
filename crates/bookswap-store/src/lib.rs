//! # bookswap-store
//!
//! In-memory domain state for the BookSwap web client: the current session,
//! messages, listings, borrow requests and notifications.
//!
//! ## Module Organization
//! ```text
//! bookswap_store/
//! ├── lib.rs          ◄─── You are here (exports, tracing setup)
//! ├── state/
//! │   ├── mod.rs          ◄─── State type exports
//! │   ├── store.rs        ◄─── DomainStore handle + StoreSnapshot
//! │   ├── session.rs      ◄─── Zero-or-one current user
//! │   ├── collections.rs  ◄─── The five entity collections
//! │   └── config.rs       ◄─── StoreConfig (latency, stamped constants)
//! ├── commands/       ◄─── UI-facing contract (silent no-ops, bool auth)
//! ├── error.rs        ◄─── StoreError
//! └── bin/snapshot.rs ◄─── Dumps a seeded store as JSON
//! ```
//!
//! ## Usage
//! ```rust
//! use bookswap_store::{commands, DomainStore, StoreConfig};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let store = DomainStore::new(StoreConfig::instant());
//!
//! assert!(commands::session::login(&store, "a@b.com", "secret").await);
//! commands::requests::approve_request(&store, "req-1");
//!
//! assert_eq!(store.notifications()[0].title, "Request approved");
//! # }
//! ```

pub mod commands;
pub mod error;
pub mod state;

pub use error::{StoreError, StoreResult};
pub use state::{DomainStore, StoreConfig, StoreSnapshot};

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=bookswap_store=trace` - Trace the store only
/// - Default: INFO, DEBUG for bookswap crates
///
/// Logs go to stderr so stdout stays clean for JSON output.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bookswap_store=debug,bookswap_core=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
