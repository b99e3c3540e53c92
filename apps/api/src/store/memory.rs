use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use super::{ensure_storable, ResumeStore, StoreError};

/// In-process store used when no database is configured, and in tests.
/// Contents are lost on restart.
#[derive(Default)]
pub struct MemoryResumeStore {
    documents: RwLock<HashMap<Uuid, Value>>,
}

impl MemoryResumeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResumeStore for MemoryResumeStore {
    async fn insert(&self, document: Value) -> Result<Uuid, StoreError> {
        ensure_storable(&document)?;

        let id = Uuid::new_v4();
        self.documents.write().await.insert(id, document);

        info!("Stored resume {id} in memory");
        Ok(id)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Value>, StoreError> {
        Ok(self.documents.read().await.get(&id).cloned())
    }
}
