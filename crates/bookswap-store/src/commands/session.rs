//! # Session Commands
//!
//! ## User Workflow
//! ```text
//! Auth modal submit
//!      │
//!      ▼
//! login(store, email, password).await   (~500 ms simulated latency)
//!      │
//!      ├── true  ─► modal closes, nav shows avatar
//!      └── false ─► "Invalid credentials"
//! ```

use tracing::debug;

use crate::state::DomainStore;

/// Resolves `true` iff both fields are non-empty.
pub async fn login(store: &DomainStore, email: &str, password: &str) -> bool {
    debug!("login command");
    match store.login(email, password).await {
        Ok(_) => true,
        Err(err) => {
            debug!(%err, "login rejected");
            false
        }
    }
}

/// Resolves `true` iff name, email and password are all non-empty.
pub async fn signup(store: &DomainStore, name: &str, email: &str, password: &str) -> bool {
    debug!("signup command");
    match store.signup(name, email, password).await {
        Ok(_) => true,
        Err(err) => {
            debug!(%err, "signup rejected");
            false
        }
    }
}

pub fn logout(store: &DomainStore) {
    debug!("logout command");
    store.logout();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StoreConfig;

    #[tokio::test]
    async fn test_login_bool_contract() {
        let store = DomainStore::new(StoreConfig::instant());

        assert!(!login(&store, "", "secret").await);
        assert!(!login(&store, "a@b.com", "").await);
        assert!(!store.is_authenticated());

        assert!(login(&store, "a@b.com", "secret").await);
        assert!(store.is_authenticated());
    }

    #[tokio::test]
    async fn test_signup_bool_contract() {
        let store = DomainStore::new(StoreConfig::instant());

        assert!(!signup(&store, "", "sam@b.com", "pw").await);
        assert!(signup(&store, "Sam", "sam@b.com", "pw").await);
        assert_eq!(store.current_user().unwrap().name, "Sam");
    }

    #[tokio::test]
    async fn test_logout_always_clears_session() {
        let store = DomainStore::new(StoreConfig::instant());

        logout(&store);
        assert!(!store.is_authenticated());

        assert!(login(&store, "a@b.com", "secret").await);
        logout(&store);
        assert!(!store.is_authenticated());
        assert!(store.current_user().is_none());
    }
}
