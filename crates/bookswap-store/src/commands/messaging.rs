//! # Messaging Commands

use tracing::debug;

use crate::state::DomainStore;

/// Appends a message to `receiver_id`. Empty content is allowed.
pub fn send_message(store: &DomainStore, receiver_id: &str, content: &str) {
    debug!(receiver_id = %receiver_id, "send_message command");
    store.send_message(receiver_id, content);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StoreConfig;

    #[tokio::test]
    async fn test_send_message_uses_session_user() {
        let store = DomainStore::new(StoreConfig::instant());
        store.signup("Sam", "sam@b.com", "pw").await.unwrap();

        send_message(&store, "priya-user", "See you Saturday");

        let messages = store.messages();
        assert_eq!(messages.len(), 3);
        let last = messages.last().unwrap();
        assert_eq!(last.sender_id, "current-user");
        assert_eq!(last.receiver_id, "priya-user");
        assert_eq!(last.content, "See you Saturday");
    }
}
