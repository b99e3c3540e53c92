use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use super::{ensure_storable, ResumeStore, StoreError};

/// Resumes stored as JSONB rows in the `resumes` table.
pub struct PgResumeStore {
    pool: PgPool,
}

impl PgResumeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResumeStore for PgResumeStore {
    async fn insert(&self, document: Value) -> Result<Uuid, StoreError> {
        ensure_storable(&document)?;

        let id = Uuid::new_v4();
        sqlx::query("INSERT INTO resumes (id, document) VALUES ($1, $2)")
            .bind(id)
            .bind(&document)
            .execute(&self.pool)
            .await?;

        info!("Inserted resume {id}");
        Ok(id)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Value>, StoreError> {
        let document: Option<Value> =
            sqlx::query_scalar("SELECT document FROM resumes WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(document)
    }
}
