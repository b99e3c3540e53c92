pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

pub use memory::MemoryResumeStore;
pub use postgres::PgResumeStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Malformed JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Resume document must be a JSON object")]
    NotAnObject,

    #[error("Resume document contains a NUL character")]
    NulCharacter,
}

/// Document store for submitted resumes.
///
/// Documents are opaque JSON objects: no schema is enforced and nothing is
/// added to or stripped from them. Every insert gets a fresh identifier, so
/// concurrent inserts never conflict. Implementations call
/// [`ensure_storable`] first so every backend accepts the same documents.
#[async_trait]
pub trait ResumeStore: Send + Sync {
    async fn insert(&self, document: Value) -> Result<Uuid, StoreError>;

    async fn find(&self, id: Uuid) -> Result<Option<Value>, StoreError>;
}

/// Rejects documents the store cannot hold as a record: anything but an
/// object, and any string or key containing `\u0000` (JSONB cannot store it).
pub(crate) fn ensure_storable(document: &Value) -> Result<(), StoreError> {
    if !document.is_object() {
        return Err(StoreError::NotAnObject);
    }
    if contains_nul(document) {
        return Err(StoreError::NulCharacter);
    }
    Ok(())
}

fn contains_nul(value: &Value) -> bool {
    match value {
        Value::String(s) => s.contains('\0'),
        Value::Array(items) => items.iter().any(contains_nul),
        Value::Object(map) => map
            .iter()
            .any(|(key, v)| key.contains('\0') || contains_nul(v)),
        _ => false,
    }
}
