use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Message, NewMessage};
use crate::store::{error::Result, MessageStore};

/// Append-only message store held in process memory
///
/// Contents are lost on restart. Clones share the same collection.
#[derive(Clone, Default)]
pub struct InMemoryMessageStore {
    messages: Arc<RwLock<Vec<Message>>>,
}

impl InMemoryMessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored messages
    pub async fn len(&self) -> usize {
        self.messages.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.messages.read().await.is_empty()
    }
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn insert(&self, message: NewMessage) -> Result<Message> {
        let stored = Message {
            id: Uuid::new_v4(),
            sender: message.sender,
            content: message.content,
            created_at: Utc::now(),
        };

        self.messages.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<Message>> {
        let mut messages = self.messages.read().await.clone();
        // Stable sort: equal timestamps keep insertion order
        messages.sort_by_key(|m| m.created_at);
        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_message(sender: &str, content: &str) -> NewMessage {
        NewMessage {
            sender: sender.to_string(),
            content: content.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_timestamp() {
        let store = InMemoryMessageStore::new();
        let before = Utc::now();

        let stored = store.insert(new_message("alice", "hi")).await.unwrap();

        assert_eq!(stored.sender, "alice");
        assert_eq!(stored.content, "hi");
        assert!(stored.created_at >= before);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_list_all_returns_every_message_in_order() {
        let store = InMemoryMessageStore::new();
        store.insert(new_message("alice", "first")).await.unwrap();
        store.insert(new_message("bob", "second")).await.unwrap();
        store.insert(new_message("alice", "third")).await.unwrap();

        let messages = store.list_all().await.unwrap();
        let contents: Vec<&str> = messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_clones_share_collection() {
        let store = InMemoryMessageStore::new();
        let other = store.clone();
        other.insert(new_message("carol", "shared")).await.unwrap();

        assert_eq!(store.len().await, 1);
        assert!(!store.is_empty().await);
    }
}
