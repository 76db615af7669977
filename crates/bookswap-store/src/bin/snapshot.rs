//! # Store Snapshot Dump
//!
//! Builds a seeded store and prints its full state as JSON, for refreshing the
//! frontend's mock fixtures.
//!
//! ## Usage
//! ```bash
//! # Logged-out snapshot
//! cargo run -p bookswap-store --bin snapshot
//!
//! # Logged in as the demo identity
//! cargo run -p bookswap-store --bin snapshot -- --login alex@example.com
//!
//! # Include the static catalog
//! cargo run -p bookswap-store --bin snapshot -- --catalog
//! ```
//!
//! `BOOKSWAP_*` environment variables apply (see `StoreConfig::from_env`).

use std::env;

use bookswap_core::catalog;
use bookswap_store::{commands, init_tracing, DomainStore, StoreConfig};
use serde_json::json;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    let mut login_email: Option<String> = None;
    let mut with_catalog = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--login" | "-l" => {
                if i + 1 < args.len() {
                    login_email = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--catalog" | "-c" => with_catalog = true,
            other => warn!(arg = %other, "Ignoring unknown argument"),
        }
        i += 1;
    }

    let store = DomainStore::new(StoreConfig::from_env());
    info!("Seeded store built");

    if let Some(email) = login_email {
        if !commands::session::login(&store, &email, "snapshot").await {
            return Err(format!("login failed for '{}'", email).into());
        }
    }

    let output = if with_catalog {
        json!({
            "store": store.snapshot(),
            "catalog": {
                "books": catalog::all_books(),
                "genres": catalog::genres(),
                "nearbyMembers": catalog::nearby_members(),
            },
        })
    } else {
        serde_json::to_value(store.snapshot())?
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
