//! # Store Configuration
//!
//! Constants the store stamps onto records it creates, plus the simulated
//! latency of the session calls.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BOOKSWAP_*`)
//! 2. Defaults (this file), which reproduce the web client's values
//!
//! ## Thread Safety
//! Configuration is read-only after the store is built, so it is shared
//! through an `Arc` without a lock.

use std::time::Duration;

use bookswap_core::{
    DEFAULT_BORROW_CONDITION, DEFAULT_BORROW_DISTANCE, DEFAULT_LISTING_DISTANCE, DEMO_USER_ID,
    SIMULATED_LATENCY_MS,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Domain store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// How long login and signup wait before answering.
    pub login_latency_ms: u64,

    /// Sender/owner id used when nobody is logged in.
    pub fallback_user_id: String,

    /// Distance stamped on new listings.
    pub listing_distance: String,

    /// Distance stamped on reserved books.
    pub borrow_distance: String,

    /// Condition stamped on reserved books.
    pub borrow_condition: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            login_latency_ms: SIMULATED_LATENCY_MS,
            fallback_user_id: DEMO_USER_ID.to_string(),
            listing_distance: DEFAULT_LISTING_DISTANCE.to_string(),
            borrow_distance: DEFAULT_BORROW_DISTANCE.to_string(),
            borrow_condition: DEFAULT_BORROW_CONDITION.to_string(),
        }
    }
}

impl StoreConfig {
    /// Creates a StoreConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `BOOKSWAP_LOGIN_LATENCY_MS`: Override simulated latency (e.g., "0")
    /// - `BOOKSWAP_LISTING_DISTANCE`: Override distance on new listings
    /// - `BOOKSWAP_BORROW_DISTANCE`: Override distance on reserved books
    ///
    /// Unparsable values are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = StoreConfig::default();

        if let Some(raw) = lookup("BOOKSWAP_LOGIN_LATENCY_MS") {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.login_latency_ms = ms,
                Err(err) => warn!(value = %raw, %err, "Ignoring BOOKSWAP_LOGIN_LATENCY_MS"),
            }
        }

        if let Some(distance) = lookup("BOOKSWAP_LISTING_DISTANCE") {
            config.listing_distance = distance;
        }

        if let Some(distance) = lookup("BOOKSWAP_BORROW_DISTANCE") {
            config.borrow_distance = distance;
        }

        config
    }

    /// Default configuration with no simulated latency. Used by tests.
    pub fn instant() -> Self {
        StoreConfig {
            login_latency_ms: 0,
            ..StoreConfig::default()
        }
    }

    #[inline]
    pub fn login_latency(&self) -> Duration {
        Duration::from_millis(self.login_latency_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_match_web_client() {
        let config = StoreConfig::default();
        assert_eq!(config.login_latency(), Duration::from_millis(500));
        assert_eq!(config.fallback_user_id, "current-user");
        assert_eq!(config.listing_distance, "0.5 mi");
        assert_eq!(config.borrow_distance, "0.8 mi");
        assert_eq!(config.borrow_condition, "Like new");
    }

    #[test]
    fn test_env_overrides() {
        let config = StoreConfig::from_lookup(lookup(&[
            ("BOOKSWAP_LOGIN_LATENCY_MS", "0"),
            ("BOOKSWAP_LISTING_DISTANCE", "2 mi"),
        ]));
        assert_eq!(config.login_latency_ms, 0);
        assert_eq!(config.listing_distance, "2 mi");
        assert_eq!(config.borrow_distance, "0.8 mi");
    }

    #[test]
    fn test_unparsable_latency_is_ignored() {
        let config = StoreConfig::from_lookup(lookup(&[("BOOKSWAP_LOGIN_LATENCY_MS", "soon")]));
        assert_eq!(config.login_latency_ms, 500);
    }
}
