use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body returned by `POST /api/resume`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreatedResponse {
    pub id: Uuid,
}
