//! Message persistence
//!
//! A [`StoreHandle`] is created once at startup and shared by every request.
//! When the database cannot be reached the handle stays [`StoreHandle::Unavailable`]
//! and each store operation fails with [`StoreError::Unavailable`] instead of
//! taking the process down.

pub mod connection;
pub mod error;
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use std::sync::Arc;

use crate::models::{Message, NewMessage};

pub use connection::{StoreConfig, DEFAULT_DATABASE};
pub use error::{Result, StoreError};
pub use memory::InMemoryMessageStore;
pub use postgres::PgMessageStore;

/// Append-only storage for chat messages
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Append a message, assigning its id and `created_at`
    async fn insert(&self, message: NewMessage) -> Result<Message>;

    /// Return every stored message, oldest first
    async fn list_all(&self) -> Result<Vec<Message>>;
}

/// Outcome of store initialization, shared by all request handlers
#[derive(Clone)]
pub enum StoreHandle {
    Connected(Arc<dyn MessageStore>),
    Unavailable { reason: String },
}

impl StoreHandle {
    /// Try once to connect to the configured database
    ///
    /// Never fails: a missing configuration or a failed connection yields
    /// [`StoreHandle::Unavailable`]. There is no retry.
    pub async fn connect(config: Option<&StoreConfig>) -> Self {
        let Some(config) = config else {
            tracing::error!("DATABASE_URL is not set, running without message storage");
            return Self::unavailable("database is not configured");
        };

        match PgMessageStore::connect(config).await {
            Ok(store) => {
                tracing::info!(database = %config.database, "Connected to message store");
                Self::connected(store)
            }
            Err(e) => {
                tracing::error!(database = %config.database, error = %e, "Failed to connect to message store");
                Self::unavailable(e.to_string())
            }
        }
    }

    pub fn connected(store: impl MessageStore + 'static) -> Self {
        StoreHandle::Connected(Arc::new(store))
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        StoreHandle::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, StoreHandle::Connected(_))
    }

    /// Borrow the store, or fail with [`StoreError::Unavailable`]
    pub fn get(&self) -> Result<&dyn MessageStore> {
        match self {
            StoreHandle::Connected(store) => Ok(store.as_ref()),
            StoreHandle::Unavailable { reason } => Err(StoreError::Unavailable(reason.clone())),
        }
    }
}
