// Opaque async key-value collaborator used for profiles, session history and
// persisted plans. The engine never assumes anything about the backing store
// beyond these three operations.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;

use crate::errors::CoachError;

/// Async key-value store. Values are JSON; serialization format beyond that
/// is an implementation detail of the collaborator.
#[async_trait]
pub trait Store: Send + Sync {
    async fn load(&self, key: &str) -> Result<Option<serde_json::Value>, CoachError>;
    async fn save(&self, key: &str, value: serde_json::Value) -> Result<(), CoachError>;
    async fn delete(&self, key: &str) -> Result<(), CoachError>;
}

/// Typed convenience wrappers over the raw JSON interface.
pub async fn load_typed<T: DeserializeOwned>(
    store: &dyn Store,
    key: &str,
) -> Result<Option<T>, CoachError> {
    match store.load(key).await? {
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
        None => Ok(None),
    }
}

pub async fn save_typed<T: Serialize>(
    store: &dyn Store,
    key: &str,
    value: &T,
) -> Result<(), CoachError> {
    store.save(key, serde_json::to_value(value)?).await
}

/// In-memory store used by the demo binary and tests. A single write lock
/// per operation makes read-modify-write sequences issued by one task appear
/// atomic to concurrent readers.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, serde_json::Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn load(&self, key: &str) -> Result<Option<serde_json::Value>, CoachError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn save(&self, key: &str, value: serde_json::Value) -> Result<(), CoachError> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CoachError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

/// Key layout shared by the coach service and its tests.
pub mod keys {
    use uuid::Uuid;

    pub fn profile(user: &str) -> String {
        format!("profile:{user}")
    }

    pub fn plan(id: Uuid) -> String {
        format!("plan:{id}")
    }

    pub fn active_plan(user: &str) -> String {
        format!("active_plan:{user}")
    }

    pub fn sessions(user: &str) -> String {
        format!("sessions:{user}")
    }

    pub fn adaptations(plan_id: Uuid) -> String {
        format!("adaptations:{plan_id}")
    }
}
